use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{
    OptionPath, OptionsMap, ensure_object, ensure_path, get_path, merge_scoped, sequence_value,
    set_path, to_fragment, value_kind,
};
use crate::error::{OptionsError, OptionsResult};

use super::plot_options::PlotRegistry;
use super::{
    Animations, Axis, AxisKind, ChartType, DataLabels, Donut, Fill, Grid, Legend, Markers,
    PlotOptions, PlotType, Responsive, States, Stroke, Theme, Toolbar, Tooltip,
};

/// Root of a chart options document.
///
/// Owns the single options tree. Component accessors (`xaxis`, `tooltip`,
/// `plot_options`, ...) return views that borrow this tree mutably, scaffold
/// their known sub-mappings on first use and write straight into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    chart_type: ChartType,
    tree: OptionsMap,
    plot_registry: PlotRegistry,
}

impl ChartOptions {
    /// Seeds `{chart: {type}, series: []}`.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        let mut chart = Map::new();
        chart.insert("type".to_owned(), Value::from(chart_type.as_str()));

        let mut tree = Map::new();
        tree.insert("chart".to_owned(), Value::Object(chart));
        tree.insert("series".to_owned(), Value::Array(Vec::new()));

        debug!(chart_type = chart_type.as_str(), "create chart options");
        Self {
            chart_type,
            tree,
            plot_registry: PlotRegistry::default(),
        }
    }

    /// Donut chart with its donut configuration forwarded to `plotOptions.pie`.
    #[must_use]
    pub fn donut(donut: Donut) -> Self {
        let mut options = Self::new(ChartType::Donut);
        options.plot_options().pie().donut(donut);
        options
    }

    /// Adopts an existing options tree, keeping every value it holds.
    pub fn from_value(value: Value) -> OptionsResult<Self> {
        let tree = match value {
            Value::Object(tree) => tree,
            other => {
                return Err(OptionsError::InvalidTree(format!(
                    "root must be a mapping, found {}",
                    value_kind(&other)
                )));
            }
        };
        let chart_type = tree
            .get("chart")
            .and_then(|chart| chart.get("type"))
            .and_then(Value::as_str)
            .ok_or(OptionsError::MissingChartType)?
            .parse::<ChartType>()?;

        debug!(chart_type = chart_type.as_str(), "adopt chart options tree");
        Ok(Self {
            chart_type,
            tree,
            plot_registry: PlotRegistry::default(),
        })
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Live view of the tree; later builder calls are visible through it.
    #[must_use]
    pub fn options(&self) -> &OptionsMap {
        &self.tree
    }

    #[must_use]
    pub fn get(&self, path: impl Into<OptionPath>) -> Option<&Value> {
        get_path(&self.tree, &path.into())
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.tree.clone())
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.tree)
    }

    /// Plot types whose component has been handed out, in first-access order.
    #[must_use]
    pub fn activated_plot_types(&self) -> Vec<PlotType> {
        self.plot_registry.activated().collect()
    }

    /// Writes `value` at a dotted `path`, creating missing mappings on the way.
    pub fn set(&mut self, path: impl Into<OptionPath>, value: impl Into<Value>) -> &mut Self {
        set_path(&mut self.tree, &path.into(), value.into());
        self
    }

    pub fn title(&mut self, text: impl Into<String>) -> &mut Self {
        self.set("title.text", Value::String(text.into()))
    }

    pub fn subtitle(&mut self, text: impl Into<String>) -> &mut Self {
        self.set("subtitle.text", Value::String(text.into()))
    }

    /// Pixels or a CSS size string such as `"100%"`.
    pub fn height(&mut self, height: impl Into<Value>) -> &mut Self {
        self.set_chart_field("height", height.into())
    }

    pub fn width(&mut self, width: impl Into<Value>) -> &mut Self {
        self.set_chart_field("width", width.into())
    }

    /// Replaces the whole series list.
    pub fn series<I, T>(&mut self, series: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.set("series", sequence_value(series))
    }

    /// Replaces the palette.
    pub fn colors<I, S>(&mut self, colors: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors.into_iter().map(|color| Value::String(color.into()));
        self.set("colors", sequence_value(colors))
    }

    /// Replaces the slice labels used by pie-like charts.
    pub fn labels<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels = labels.into_iter().map(|label| Value::String(label.into()));
        self.set("labels", sequence_value(labels))
    }

    /// Merges interaction states; each state's `filter` is merged as well.
    pub fn states(&mut self, states: States) -> &mut Self {
        self.merge_section("states", &states, &States::DEEP_PATHS)
    }

    /// Replaces the breakpoint list; each `options` value is kept verbatim.
    pub fn responsive<I>(&mut self, breakpoints: I) -> &mut Self
    where
        I: IntoIterator<Item = Responsive>,
    {
        self.set("responsive", sequence_value(breakpoints))
    }

    pub fn animations(&mut self, animations: Animations) -> &mut Self {
        self.merge_chart_child("animations", &animations, &Animations::DEEP_PATHS)
    }

    pub fn toolbar(&mut self, toolbar: Toolbar) -> &mut Self {
        self.merge_chart_child("toolbar", &toolbar, &Toolbar::DEEP_PATHS)
    }

    pub fn stroke(&mut self, stroke: Stroke) -> &mut Self {
        self.merge_section("stroke", &stroke, &[])
    }

    pub fn fill(&mut self, fill: Fill) -> &mut Self {
        self.merge_section("fill", &fill, &Fill::DEEP_PATHS)
    }

    /// Bar charts only: passthrough to `plotOptions.bar.horizontal`.
    pub fn horizontal(&mut self, horizontal: bool) -> &mut Self {
        if self.chart_type == ChartType::Bar {
            self.plot_options().bar().horizontal(horizontal);
        } else {
            debug!(
                chart_type = self.chart_type.as_str(),
                "horizontal only applies to bar charts; skipping"
            );
        }
        self
    }

    pub fn xaxis(&mut self) -> Axis<'_> {
        Axis::attach(&mut self.tree, AxisKind::X)
    }

    pub fn yaxis(&mut self) -> Axis<'_> {
        Axis::attach(&mut self.tree, AxisKind::Y)
    }

    pub fn tooltip(&mut self) -> Tooltip<'_> {
        Tooltip::attach(&mut self.tree)
    }

    pub fn legend(&mut self) -> Legend<'_> {
        Legend::attach(&mut self.tree)
    }

    pub fn grid(&mut self) -> Grid<'_> {
        Grid::attach(&mut self.tree)
    }

    pub fn data_labels(&mut self) -> DataLabels<'_> {
        DataLabels::attach(&mut self.tree)
    }

    pub fn markers(&mut self) -> Markers<'_> {
        Markers::attach(&mut self.tree)
    }

    pub fn theme(&mut self) -> Theme<'_> {
        Theme::attach(&mut self.tree)
    }

    pub fn plot_options(&mut self) -> PlotOptions<'_> {
        PlotOptions::attach(&mut self.tree, &mut self.plot_registry)
    }

    /// `chart` sub-mapping; re-created as a line chart when absent or null.
    fn chart_section_mut(&mut self) -> Option<&mut OptionsMap> {
        let slot = self.tree.entry("chart".to_owned()).or_insert(Value::Null);
        if slot.is_null() {
            debug!("chart section missing; re-creating it with the line discriminant");
            let mut chart = Map::new();
            chart.insert("type".to_owned(), Value::from(ChartType::Line.as_str()));
            *slot = Value::Object(chart);
        }
        slot.as_object_mut()
    }

    fn set_chart_field(&mut self, key: &str, value: Value) -> &mut Self {
        match self.chart_section_mut() {
            Some(chart) => {
                chart.insert(key.to_owned(), value);
            }
            None => debug!(key, "chart section is not a mapping; skipping write"),
        }
        self
    }

    fn merge_chart_child<T: Serialize>(
        &mut self,
        key: &str,
        partial: &T,
        deep_paths: &[&str],
    ) -> &mut Self {
        let Some(fragment) = to_fragment(partial, key) else {
            return self;
        };
        match self
            .chart_section_mut()
            .and_then(|chart| ensure_object(chart, key))
        {
            Some(target) => merge_scoped(target, fragment, deep_paths),
            None => debug!(key, "chart child is not a mapping; skipping merge"),
        }
        self
    }

    fn merge_section<T: Serialize>(
        &mut self,
        path: &str,
        partial: &T,
        deep_paths: &[&str],
    ) -> &mut Self {
        let Some(fragment) = to_fragment(partial, path) else {
            return self;
        };
        match ensure_path(&mut self.tree, &OptionPath::parse(path)) {
            Some(target) => merge_scoped(target, fragment, deep_paths),
            None => debug!(path, "options section is not a mapping; skipping merge"),
        }
        self
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::new(ChartType::default())
    }
}

impl From<ChartType> for ChartOptions {
    fn from(chart_type: ChartType) -> Self {
        Self::new(chart_type)
    }
}

impl Serialize for ChartOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.tree.serialize(serializer)
    }
}
