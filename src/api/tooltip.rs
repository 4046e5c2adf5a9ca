use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionsMap, scaffold};

use super::component::{OptionsComponent, section_mut};

const KEY: &str = "tooltip";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tooltip section for one axis (`tooltip.x` / `tooltip.y`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Date format pattern used by datetime axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct Tooltip<'a> {
    root: &'a mut OptionsMap,
}

impl<'a> Tooltip<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap) -> Self {
        debug!(component = KEY, "attach component");
        scaffold(root, KEY, &["style", "x", "y"]);
        Self { root }
    }

    pub fn enabled(self, enabled: bool) -> Self {
        self.set_option("enabled", enabled)
    }

    /// Shows every series' value at the hovered x position.
    pub fn shared(self, shared: bool) -> Self {
        self.set_option("shared", shared)
    }

    pub fn intersect(self, intersect: bool) -> Self {
        self.set_option("intersect", intersect)
    }

    pub fn follow_cursor(self, follow: bool) -> Self {
        self.set_option("followCursor", follow)
    }

    pub fn fill_series_color(self, fill: bool) -> Self {
        self.set_option("fillSeriesColor", fill)
    }

    pub fn theme(self, theme: impl Into<String>) -> Self {
        self.set_option("theme", Value::String(theme.into()))
    }

    pub fn style(self, style: TooltipStyle) -> Self {
        self.merge_option("style", &style, &[])
    }

    pub fn x(self, x: TooltipAxis) -> Self {
        self.merge_option("x", &x, &[])
    }

    pub fn y(self, y: TooltipAxis) -> Self {
        self.merge_option("y", &y, &[])
    }
}

impl OptionsComponent for Tooltip<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        section_mut(self.root, KEY)
    }
}
