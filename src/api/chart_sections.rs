use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filter applied to a series in one interaction state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateFilter {
    /// `"none"`, `"lighten"` or `"darken"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<StateFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_multiple_data_points_selection: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Top-level `states`: `normal`, `hover` and `active` each carry a `filter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct States {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<StateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<StateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<StateOptions>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl States {
    pub(crate) const DEEP_PATHS: [&'static str; 6] = [
        "normal",
        "normal.filter",
        "hover",
        "hover.filter",
        "active",
        "active.filter",
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPhase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `chart.animations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate_gradually: Option<AnimationPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_animation: Option<AnimationPhase>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Animations {
    pub(crate) const DEEP_PATHS: [&'static str; 2] = ["animateGradually", "dynamicAnimation"];
}

/// Options override applied below a viewport width.
///
/// `options` is passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsive {
    pub breakpoint: u32,
    pub options: Value,
}

impl Responsive {
    #[must_use]
    pub fn new(breakpoint: u32, options: Value) -> Self {
        Self {
            breakpoint,
            options,
        }
    }
}

impl From<Responsive> for Value {
    fn from(responsive: Responsive) -> Self {
        let mut entry = Map::new();
        entry.insert("breakpoint".to_owned(), Value::from(responsive.breakpoint));
        entry.insert("options".to_owned(), responsive.options);
        Value::Object(entry)
    }
}

/// Top-level `stroke`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// `"smooth"`, `"straight"`, `"stepline"` or one per series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shade_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity_from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity_to: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<f64>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Top-level `fill`; `gradient` is merged rather than replaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// `"solid"`, `"gradient"`, `"pattern"` or `"image"`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fill {
    pub(crate) const DEEP_PATHS: [&'static str; 1] = ["gradient"];
}

/// `chart.toolbar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolbar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    /// Per-tool toggles (`download`, `zoom`, `pan`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Toolbar {
    pub(crate) const DEEP_PATHS: [&'static str; 1] = ["tools"];
}
