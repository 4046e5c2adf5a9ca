use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text styling shared by axis labels, data labels and titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Number (`600`) or keyword (`"bold"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Value>,
    /// Single color or one color per label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextStyle {
    #[must_use]
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl Into<Value>) -> Self {
        self.colors = Some(colors.into());
        self
    }
}

/// Value range painted with one color (bar ranges, heatmap color scales).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRange {
    pub from: f64,
    pub to: f64,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColorRange {
    #[must_use]
    pub fn new(from: f64, to: f64, color: impl Into<String>) -> Self {
        Self {
            from,
            to,
            color: color.into(),
            name: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
