use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{OptionsMap, number_value};

use super::component::OptionsComponent;
use super::plot_options::{PlotSection, PlotType};
use super::plot_pie::CenterLabel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialBarDataLabels {
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

/// `plotOptions.radialBar` component.
pub struct RadialBarOptions<'a> {
    section: PlotSection<'a>,
}

impl<'a> RadialBarOptions<'a> {
    pub(crate) fn new(section: PlotSection<'a>) -> Self {
        debug_assert_eq!(section.plot_type(), PlotType::RadialBar);
        Self { section }
    }

    pub fn start_angle(self, degrees: f64) -> Self {
        self.set_option("startAngle", number_value(degrees))
    }

    pub fn end_angle(self, degrees: f64) -> Self {
        self.set_option("endAngle", number_value(degrees))
    }

    pub fn offset_x(self, offset: f64) -> Self {
        self.set_option("offsetX", number_value(offset))
    }

    pub fn offset_y(self, offset: f64) -> Self {
        self.set_option("offsetY", number_value(offset))
    }

    /// Size of the empty center, e.g. `"70%"`.
    pub fn hollow_size(self, size: impl Into<Value>) -> Self {
        self.set_option("hollow.size", size)
    }

    pub fn data_labels(self, labels: RadialBarDataLabels) -> Self {
        self.merge_option("dataLabels", &labels, &["name", "value", "total"])
    }
}

impl OptionsComponent for RadialBarOptions<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        self.section.ensure_type_key()
    }
}
