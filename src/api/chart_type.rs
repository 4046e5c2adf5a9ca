use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Chart discriminant stored at `chart.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Line,
    Area,
    Bar,
    Pie,
    Donut,
    RadialBar,
    Heatmap,
    Scatter,
    Bubble,
    BoxPlot,
    Candlestick,
    Radar,
    PolarArea,
    Treemap,
    RangeBar,
    RangeArea,
}

impl ChartType {
    pub const ALL: [ChartType; 16] = [
        Self::Line,
        Self::Area,
        Self::Bar,
        Self::Pie,
        Self::Donut,
        Self::RadialBar,
        Self::Heatmap,
        Self::Scatter,
        Self::Bubble,
        Self::BoxPlot,
        Self::Candlestick,
        Self::Radar,
        Self::PolarArea,
        Self::Treemap,
        Self::RangeBar,
        Self::RangeArea,
    ];

    /// Name understood by the renderer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::RadialBar => "radialBar",
            Self::Heatmap => "heatmap",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::BoxPlot => "boxPlot",
            Self::Candlestick => "candlestick",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Treemap => "treemap",
            Self::RangeBar => "rangeBar",
            Self::RangeArea => "rangeArea",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = OptionsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| OptionsError::UnknownChartType(name.to_owned()))
    }
}
