use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};

use super::{ChartOptions, ChartType};

pub const OPTIONS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for exchanging options trees with other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionsJsonContractV1 {
    pub schema_version: u32,
    pub chart_type: ChartType,
    pub options: Value,
}

impl ChartOptions {
    /// Bare tree as pretty-printed JSON, ready for the renderer.
    pub fn to_json_pretty(&self) -> OptionsResult<String> {
        serde_json::to_string_pretty(self.options()).map_err(|e| {
            OptionsError::Serialization(format!("failed to serialize chart options: {e}"))
        })
    }

    pub fn to_json_string(&self) -> OptionsResult<String> {
        serde_json::to_string(self.options()).map_err(|e| {
            OptionsError::Serialization(format!("failed to serialize chart options: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> OptionsResult<String> {
        let payload = ChartOptionsJsonContractV1 {
            schema_version: OPTIONS_JSON_SCHEMA_V1,
            chart_type: self.chart_type(),
            options: self.to_value(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            OptionsError::Serialization(format!(
                "failed to serialize chart options contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare options tree or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> OptionsResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            OptionsError::Serialization(format!("failed to parse chart options json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return Self::from_value(value);
        }

        let payload: ChartOptionsJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            OptionsError::Serialization(format!("failed to parse chart options contract: {e}"))
        })?;
        if payload.schema_version != OPTIONS_JSON_SCHEMA_V1 {
            return Err(OptionsError::InvalidTree(format!(
                "unsupported chart options schema version: {}",
                payload.schema_version
            )));
        }

        let options = Self::from_value(payload.options)?;
        if options.chart_type() != payload.chart_type {
            return Err(OptionsError::InvalidTree(format!(
                "contract chart type `{}` does not match tree chart type `{}`",
                payload.chart_type,
                options.chart_type()
            )));
        }
        Ok(options)
    }
}
