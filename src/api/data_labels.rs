use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionsMap, number_value, scaffold, sequence_value};

use super::component::{OptionsComponent, section_mut};
use super::style::TextStyle;

const KEY: &str = "dataLabels";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLabelsBackground {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fore_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct DataLabels<'a> {
    root: &'a mut OptionsMap,
}

impl<'a> DataLabels<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap) -> Self {
        debug!(component = KEY, "attach component");
        scaffold(root, KEY, &["style", "background"]);
        Self { root }
    }

    pub fn enabled(self, enabled: bool) -> Self {
        self.set_option("enabled", enabled)
    }

    /// Restricts labels to the series at the given indices.
    pub fn enabled_on_series<I>(self, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.set_option("enabledOnSeries", sequence_value(indices))
    }

    pub fn text_anchor(self, anchor: impl Into<String>) -> Self {
        self.set_option("textAnchor", Value::String(anchor.into()))
    }

    pub fn distributed(self, distributed: bool) -> Self {
        self.set_option("distributed", distributed)
    }

    pub fn offset_x(self, offset: f64) -> Self {
        self.set_option("offsetX", number_value(offset))
    }

    pub fn offset_y(self, offset: f64) -> Self {
        self.set_option("offsetY", number_value(offset))
    }

    pub fn style(self, style: TextStyle) -> Self {
        self.merge_option("style", &style, &[])
    }

    pub fn background(self, background: DataLabelsBackground) -> Self {
        self.merge_option("background", &background, &[])
    }
}

impl OptionsComponent for DataLabels<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        section_mut(self.root, KEY)
    }
}
