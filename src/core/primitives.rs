use chrono::{DateTime, Utc};
use serde_json::Value;

/// Renderers consume datetime axes as epoch milliseconds.
#[must_use]
pub fn datetime_to_epoch_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Converts a float into a tree number; non-finite values become `null`.
#[must_use]
pub fn number_value(value: f64) -> Value {
    Value::from(value)
}

/// Builds a sequence value from any list of convertible items.
pub fn sequence_value<I, T>(items: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    Value::Array(items.into_iter().map(Into::into).collect())
}
