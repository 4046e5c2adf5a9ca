use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{OptionsMap, number_value};

use super::component::OptionsComponent;
use super::plot_options::{PlotSection, PlotType};
use super::style::ColorRange;

/// Bar coloring bag merged into `plotOptions.bar.colors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<ColorRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_bar_colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_bar_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_bar_radius: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `plotOptions.bar` component.
pub struct BarOptions<'a> {
    section: PlotSection<'a>,
}

impl<'a> BarOptions<'a> {
    pub(crate) fn new(section: PlotSection<'a>) -> Self {
        debug_assert_eq!(section.plot_type(), PlotType::Bar);
        Self { section }
    }

    pub fn horizontal(self, horizontal: bool) -> Self {
        self.set_option("horizontal", horizontal)
    }

    /// Pixels or percentage string such as `"55%"`.
    pub fn column_width(self, width: impl Into<Value>) -> Self {
        self.set_option("columnWidth", width)
    }

    pub fn bar_height(self, height: impl Into<Value>) -> Self {
        self.set_option("barHeight", height)
    }

    pub fn distributed(self, distributed: bool) -> Self {
        self.set_option("distributed", distributed)
    }

    pub fn border_radius(self, radius: f64) -> Self {
        self.set_option("borderRadius", number_value(radius))
    }

    pub fn colors(self, colors: BarColors) -> Self {
        self.merge_option("colors", &colors, &[])
    }
}

impl OptionsComponent for BarOptions<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        self.section.ensure_type_key()
    }
}
