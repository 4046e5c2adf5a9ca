use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{OptionsMap, number_value};

use super::component::OptionsComponent;
use super::plot_options::{PlotSection, PlotType};

const DONUT_DEEP_PATHS: [&str; 4] = ["labels", "labels.name", "labels.value", "labels.total"];

/// One of the labels drawn in the middle of a donut or radial bar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_always: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CenterLabel {
    #[must_use]
    pub fn shown(show: bool) -> Self {
        Self {
            show: Some(show),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<CenterLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CenterLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<CenterLabel>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donut {
    /// Hole size as a percentage string, e.g. `"65%"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<DonutLabels>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `plotOptions.pie` component (also drives donut charts).
pub struct PieOptions<'a> {
    section: PlotSection<'a>,
}

impl<'a> PieOptions<'a> {
    pub(crate) fn new(section: PlotSection<'a>) -> Self {
        debug_assert_eq!(section.plot_type(), PlotType::Pie);
        Self { section }
    }

    pub fn start_angle(self, degrees: f64) -> Self {
        self.set_option("startAngle", number_value(degrees))
    }

    pub fn end_angle(self, degrees: f64) -> Self {
        self.set_option("endAngle", number_value(degrees))
    }

    pub fn expand_on_click(self, expand: bool) -> Self {
        self.set_option("expandOnClick", expand)
    }

    pub fn offset_x(self, offset: f64) -> Self {
        self.set_option("offsetX", number_value(offset))
    }

    pub fn offset_y(self, offset: f64) -> Self {
        self.set_option("offsetY", number_value(offset))
    }

    pub fn custom_scale(self, scale: f64) -> Self {
        self.set_option("customScale", number_value(scale))
    }

    /// Merges into `donut`; `labels` and its `name`/`value`/`total` entries are
    /// merged too, so unrelated label settings survive.
    pub fn donut(self, donut: Donut) -> Self {
        self.merge_option("donut", &donut, &DONUT_DEEP_PATHS)
    }
}

impl OptionsComponent for PieOptions<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        self.section.ensure_type_key()
    }
}
