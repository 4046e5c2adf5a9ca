use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionsMap, scaffold};

use super::component::{OptionsComponent, section_mut};

const KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Single-hue palette derived from one base color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monochrome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade_to: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade_intensity: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct Theme<'a> {
    root: &'a mut OptionsMap,
}

impl<'a> Theme<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap) -> Self {
        debug!(component = KEY, "attach component");
        scaffold(root, KEY, &["monochrome"]);
        Self { root }
    }

    pub fn mode(self, mode: ThemeMode) -> Self {
        self.set_option("mode", mode.as_str())
    }

    /// Named palette, e.g. `"palette1"`.
    pub fn palette(self, palette: impl Into<String>) -> Self {
        self.set_option("palette", Value::String(palette.into()))
    }

    pub fn monochrome(self, monochrome: Monochrome) -> Self {
        self.merge_option("monochrome", &monochrome, &[])
    }
}

impl OptionsComponent for Theme<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        section_mut(self.root, KEY)
    }
}
