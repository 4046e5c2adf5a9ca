use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionsMap, scaffold};

use super::component::{OptionsComponent, section_mut};

const KEY: &str = "legend";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Right,
    Bottom,
    Left,
}

impl LegendPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_series_colors: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendMarkers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMargin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct Legend<'a> {
    root: &'a mut OptionsMap,
}

impl<'a> Legend<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap) -> Self {
        debug!(component = KEY, "attach component");
        scaffold(root, KEY, &["labels", "markers", "itemMargin"]);
        Self { root }
    }

    pub fn show(self, show: bool) -> Self {
        self.set_option("show", show)
    }

    pub fn position(self, position: LegendPosition) -> Self {
        self.set_option("position", position.as_str())
    }

    pub fn horizontal_align(self, align: HorizontalAlign) -> Self {
        self.set_option("horizontalAlign", align.as_str())
    }

    pub fn floating(self, floating: bool) -> Self {
        self.set_option("floating", floating)
    }

    pub fn font_size(self, font_size: impl Into<String>) -> Self {
        self.set_option("fontSize", Value::String(font_size.into()))
    }

    pub fn labels(self, labels: LegendLabels) -> Self {
        self.merge_option("labels", &labels, &[])
    }

    pub fn markers(self, markers: LegendMarkers) -> Self {
        self.merge_option("markers", &markers, &[])
    }

    pub fn item_margin(self, margin: ItemMargin) -> Self {
        self.merge_option("itemMargin", &margin, &[])
    }
}

impl OptionsComponent for Legend<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        section_mut(self.root, KEY)
    }
}
