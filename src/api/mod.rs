mod axis;
mod chart_options;
mod chart_sections;
mod chart_type;
mod component;
mod data_labels;
mod grid;
mod json_contract;
mod legend;
mod markers;
mod plot_bar;
mod plot_heatmap;
mod plot_options;
mod plot_pie;
mod plot_radial_bar;
mod series;
mod style;
mod theme;
mod tooltip;

pub use axis::{Axis, AxisBorder, AxisCategory, AxisKind, AxisLabels, AxisTicks, AxisType, Crosshairs};
pub use chart_options::ChartOptions;
pub use chart_sections::{
    AnimationPhase, Animations, Fill, Gradient, Responsive, StateFilter, StateOptions, States,
    Stroke, Toolbar,
};
pub use chart_type::ChartType;
pub use component::OptionsComponent;
pub use data_labels::{DataLabels, DataLabelsBackground};
pub use grid::{Grid, GridAxis, GridLines, GridPadding};
pub use json_contract::{ChartOptionsJsonContractV1, OPTIONS_JSON_SCHEMA_V1};
pub use legend::{HorizontalAlign, ItemMargin, Legend, LegendLabels, LegendMarkers, LegendPosition};
pub use markers::{MarkerHover, Markers};
pub use plot_bar::{BarColors, BarOptions};
pub use plot_heatmap::{ColorScale, HeatmapOptions};
pub use plot_options::{PlotOptions, PlotType};
pub use plot_pie::{CenterLabel, Donut, DonutLabels, PieOptions};
pub use plot_radial_bar::{RadialBarDataLabels, RadialBarOptions};
pub use series::Series;
pub use style::{ColorRange, TextStyle};
pub use theme::{Monochrome, Theme, ThemeMode};
pub use tooltip::{Tooltip, TooltipAxis, TooltipStyle};
