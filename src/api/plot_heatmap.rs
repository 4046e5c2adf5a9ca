use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{OptionsMap, number_value};

use super::component::OptionsComponent;
use super::plot_options::{PlotSection, PlotType};
use super::style::ColorRange;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<ColorRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `plotOptions.heatmap` component.
pub struct HeatmapOptions<'a> {
    section: PlotSection<'a>,
}

impl<'a> HeatmapOptions<'a> {
    pub(crate) fn new(section: PlotSection<'a>) -> Self {
        debug_assert_eq!(section.plot_type(), PlotType::Heatmap);
        Self { section }
    }

    pub fn radius(self, radius: f64) -> Self {
        self.set_option("radius", number_value(radius))
    }

    pub fn enable_shades(self, enable: bool) -> Self {
        self.set_option("enableShades", enable)
    }

    pub fn shade_intensity(self, intensity: f64) -> Self {
        self.set_option("shadeIntensity", number_value(intensity))
    }

    pub fn distributed(self, distributed: bool) -> Self {
        self.set_option("distributed", distributed)
    }

    pub fn reverse_negative_shade(self, reverse: bool) -> Self {
        self.set_option("reverseNegativeShade", reverse)
    }

    pub fn use_fill_color_as_stroke(self, enabled: bool) -> Self {
        self.set_option("useFillColorAsStroke", enabled)
    }

    pub fn color_scale(self, scale: ColorScale) -> Self {
        self.merge_option("colorScale", &scale, &[])
    }
}

impl OptionsComponent for HeatmapOptions<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        self.section.ensure_type_key()
    }
}
