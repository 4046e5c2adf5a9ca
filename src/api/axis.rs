use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionPath, OptionsMap, datetime_to_epoch_millis, ensure_path, number_value};

use super::component::OptionsComponent;
use super::style::TextStyle;

const AXIS_CHILDREN: [&str; 5] = ["title", "labels.style", "axisBorder", "axisTicks", "crosshairs"];

/// Which axis slot an [`Axis`] view writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Primary axis at `xaxis`; always a single mapping.
    X,
    /// Secondary axis at `yaxis`; a single mapping or a sequence of mappings.
    Y,
}

impl AxisKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::X => "xaxis",
            Self::Y => "yaxis",
        }
    }
}

/// Scale interpretation of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Datetime,
    Numeric,
}

impl AxisType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Datetime => "datetime",
            Self::Numeric => "numeric",
        }
    }
}

/// One axis category: text, number or UTC timestamp (stored as epoch millis).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisCategory(Value);

impl AxisCategory {
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<&str> for AxisCategory {
    fn from(text: &str) -> Self {
        Self(Value::from(text))
    }
}

impl From<String> for AxisCategory {
    fn from(text: String) -> Self {
        Self(Value::from(text))
    }
}

impl From<i32> for AxisCategory {
    fn from(number: i32) -> Self {
        Self(Value::from(number))
    }
}

impl From<i64> for AxisCategory {
    fn from(number: i64) -> Self {
        Self(Value::from(number))
    }
}

impl From<u32> for AxisCategory {
    fn from(number: u32) -> Self {
        Self(Value::from(number))
    }
}

impl From<f64> for AxisCategory {
    fn from(number: f64) -> Self {
        Self(number_value(number))
    }
}

impl From<DateTime<Utc>> for AxisCategory {
    fn from(time: DateTime<Utc>) -> Self {
        Self(Value::from(datetime_to_epoch_millis(time)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_always: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_overlapping_labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    /// Merged into the existing `labels.style` instead of replacing it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBorder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTicks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crosshairs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    /// Pixel width or `"barWidth"`/`"tickWidth"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// View over one axis slot (`xaxis` or `yaxis`).
///
/// When `yaxis` holds a sequence, every write targets element 0; the other
/// elements are never read nor written.
pub struct Axis<'a> {
    root: &'a mut OptionsMap,
    kind: AxisKind,
}

impl<'a> Axis<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap, kind: AxisKind) -> Self {
        normalize_slot(root, kind);
        match resolve_axis(root, kind) {
            Some(axis) => {
                for child in AXIS_CHILDREN {
                    scaffold_child(axis, child);
                }
            }
            None => debug!(axis = kind.key(), "axis slot is not a mapping; skipping scaffolding"),
        }
        Self { root, kind }
    }

    #[must_use]
    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn title(self, text: impl Into<String>) -> Self {
        self.set_option("title.text", Value::String(text.into()))
    }

    /// Replaces the category list verbatim.
    pub fn categories<I, C>(self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<AxisCategory>,
    {
        let categories: Vec<Value> = categories
            .into_iter()
            .map(|category| Into::<AxisCategory>::into(category).into_value())
            .collect();
        self.set_option("categories", categories)
    }

    pub fn axis_type(self, axis_type: AxisType) -> Self {
        self.set_option("type", axis_type.as_str())
    }

    pub fn labels(self, labels: AxisLabels) -> Self {
        self.merge_option("labels", &labels, &["style"])
    }

    /// Sets both bounds. `min <= max` is the caller's responsibility.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.set_option("min", number_value(min))
            .set_option("max", number_value(max))
    }

    /// Approximate number of ticks; the renderer treats it as a hint.
    pub fn tick_amount(self, amount: u32) -> Self {
        self.set_option("tickAmount", amount)
    }

    pub fn axis_border(self, border: AxisBorder) -> Self {
        self.merge_option("axisBorder", &border, &[])
    }

    pub fn axis_ticks(self, ticks: AxisTicks) -> Self {
        self.merge_option("axisTicks", &ticks, &[])
    }

    pub fn crosshairs(self, crosshairs: Crosshairs) -> Self {
        self.merge_option("crosshairs", &crosshairs, &[])
    }

    pub fn show(self, show: bool) -> Self {
        self.set_option("show", show)
    }

    /// Draws the axis on the opposite side of the plot area.
    pub fn opposite(self, opposite: bool) -> Self {
        self.set_option("opposite", opposite)
    }

    pub fn decimals_in_float(self, decimals: u32) -> Self {
        self.set_option("decimalsInFloat", decimals)
    }
}

impl OptionsComponent for Axis<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        resolve_axis(self.root, self.kind)
    }
}

fn normalize_slot(root: &mut OptionsMap, kind: AxisKind) {
    let slot = root.entry(kind.key().to_owned()).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Object(Map::new());
        return;
    }
    if let (AxisKind::Y, Value::Array(axes)) = (kind, slot) {
        if axes.is_empty() {
            axes.push(Value::Object(Map::new()));
        }
    }
}

fn resolve_axis(root: &mut OptionsMap, kind: AxisKind) -> Option<&mut OptionsMap> {
    match (kind, root.get_mut(kind.key())?) {
        (_, Value::Object(axis)) => Some(axis),
        (AxisKind::Y, Value::Array(axes)) => axes.first_mut()?.as_object_mut(),
        _ => None,
    }
}

fn scaffold_child(axis: &mut OptionsMap, child: &str) {
    let _ = ensure_path(axis, &OptionPath::parse(child));
}
