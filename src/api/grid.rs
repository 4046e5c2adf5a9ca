use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionsMap, number_value, scaffold};

use super::component::{OptionsComponent, section_mut};

const KEY: &str = "grid";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLines {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Grid settings along one axis (`grid.xaxis` / `grid.yaxis`).
///
/// `lines` replaces the existing `lines` mapping as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<GridLines>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GridAxis {
    #[must_use]
    pub fn lines(show: bool) -> Self {
        Self {
            lines: Some(GridLines {
                show: Some(show),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPadding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct Grid<'a> {
    root: &'a mut OptionsMap,
}

impl<'a> Grid<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap) -> Self {
        debug!(component = KEY, "attach component");
        scaffold(root, KEY, &["xaxis.lines", "yaxis.lines", "padding"]);
        Self { root }
    }

    pub fn show(self, show: bool) -> Self {
        self.set_option("show", show)
    }

    pub fn border_color(self, color: impl Into<String>) -> Self {
        self.set_option("borderColor", Value::String(color.into()))
    }

    pub fn stroke_dash_array(self, dash: f64) -> Self {
        self.set_option("strokeDashArray", number_value(dash))
    }

    /// `"back"` or `"front"` relative to the series.
    pub fn position(self, position: impl Into<String>) -> Self {
        self.set_option("position", Value::String(position.into()))
    }

    pub fn xaxis(self, xaxis: GridAxis) -> Self {
        self.merge_option("xaxis", &xaxis, &[])
    }

    pub fn yaxis(self, yaxis: GridAxis) -> Self {
        self.merge_option("yaxis", &yaxis, &[])
    }

    pub fn padding(self, padding: GridPadding) -> Self {
        self.merge_option("padding", &padding, &[])
    }
}

impl OptionsComponent for Grid<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        section_mut(self.root, KEY)
    }
}
