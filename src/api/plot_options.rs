use indexmap::IndexSet;
use tracing::debug;

use crate::core::{OptionsMap, ensure_object};

use super::{BarOptions, HeatmapOptions, PieOptions, RadialBarOptions};

const KEY: &str = "plotOptions";

/// Plot-type sub-trees living under `plotOptions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotType {
    Bar,
    Pie,
    RadialBar,
    Heatmap,
}

impl PlotType {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
            Self::RadialBar => "radialBar",
            Self::Heatmap => "heatmap",
        }
    }
}

/// Insertion-ordered record of the plot-type components handed out so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PlotRegistry {
    activated: IndexSet<PlotType>,
}

impl PlotRegistry {
    /// Returns `true` the first time `plot_type` is activated.
    pub(crate) fn activate(&mut self, plot_type: PlotType) -> bool {
        let inserted = self.activated.insert(plot_type);
        if inserted {
            debug!(plot_type = plot_type.key(), "activate plot-type component");
        }
        inserted
    }

    pub(crate) fn activated(&self) -> impl Iterator<Item = PlotType> + '_ {
        self.activated.iter().copied()
    }
}

/// Manager for the `plotOptions` section.
///
/// Creating the manager guarantees `plotOptions` exists, but the per-type keys
/// (`plotOptions.bar`, ...) only appear once a setter of that type runs.
pub struct PlotOptions<'a> {
    root: &'a mut OptionsMap,
    registry: &'a mut PlotRegistry,
}

impl<'a> PlotOptions<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap, registry: &'a mut PlotRegistry) -> Self {
        if ensure_object(root, KEY).is_none() {
            debug!("plotOptions is not a mapping; plot-type writes will be skipped");
        }
        Self { root, registry }
    }

    pub fn bar(self) -> BarOptions<'a> {
        BarOptions::new(self.section(PlotType::Bar))
    }

    pub fn pie(self) -> PieOptions<'a> {
        PieOptions::new(self.section(PlotType::Pie))
    }

    pub fn radial_bar(self) -> RadialBarOptions<'a> {
        RadialBarOptions::new(self.section(PlotType::RadialBar))
    }

    pub fn heatmap(self) -> HeatmapOptions<'a> {
        HeatmapOptions::new(self.section(PlotType::Heatmap))
    }

    fn section(self, plot_type: PlotType) -> PlotSection<'a> {
        self.registry.activate(plot_type);
        PlotSection {
            root: self.root,
            plot_type,
        }
    }
}

/// Shared state of every plot-type component: the tree and the type key.
pub(crate) struct PlotSection<'a> {
    root: &'a mut OptionsMap,
    plot_type: PlotType,
}

impl PlotSection<'_> {
    /// Ensures `plotOptions.<type>` exists and returns it.
    pub(crate) fn ensure_type_key(&mut self) -> Option<&mut OptionsMap> {
        let plot_options = ensure_object(self.root, KEY)?;
        ensure_object(plot_options, self.plot_type.key())
    }

    pub(crate) fn plot_type(&self) -> PlotType {
        self.plot_type
    }
}
