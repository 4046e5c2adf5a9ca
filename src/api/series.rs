use serde_json::{Map, Value};

use super::ChartType;

/// One entry of the top-level `series` list.
///
/// Pie-like charts take plain numbers instead; `ChartOptions::series` accepts
/// anything convertible into a tree value, including this record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub name: Option<String>,
    pub data: Vec<Value>,
    /// Per-series chart type for mixed (combo) charts.
    pub series_type: Option<ChartType>,
    pub color: Option<String>,
    pub extra: Map<String, Value>,
}

impl Series {
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, data: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self {
            name: Some(name.into()),
            data: data.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, series_type: ChartType) -> Self {
        self.series_type = Some(series_type);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Adds an arbitrary extra field, e.g. `group` for stacked bars.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<Series> for Value {
    fn from(series: Series) -> Self {
        let mut entry = Map::new();
        if let Some(name) = series.name {
            entry.insert("name".to_owned(), Value::String(name));
        }
        if let Some(series_type) = series.series_type {
            entry.insert("type".to_owned(), Value::from(series_type.as_str()));
        }
        if let Some(color) = series.color {
            entry.insert("color".to_owned(), Value::String(color));
        }
        entry.insert("data".to_owned(), Value::Array(series.data));
        for (key, value) in series.extra {
            entry.entry(key).or_insert(value);
        }
        Value::Object(entry)
    }
}
