//! chart-options: fluent builder for chart options documents.
//!
//! The crate assembles the nested options tree consumed by JavaScript chart
//! renderers. Component views (axes, tooltip, legend, plot types, ...) borrow
//! the one tree owned by [`ChartOptions`], create the sub-mappings they need on
//! first use and merge partial settings without clobbering sibling fields.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartOptions, ChartType, OptionsComponent, Series};
pub use error::{OptionsError, OptionsResult};
