use std::fmt;

use serde_json::{Map, Value};
use tracing::trace;

/// Mapping node of the options tree.
pub type OptionsMap = Map<String, Value>;

/// Dot-separated location inside the options tree.
///
/// Empty segments are dropped while parsing, so `"xaxis..labels"` and
/// `"xaxis.labels"` address the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OptionPath {
    segments: Vec<String>,
}

impl OptionPath {
    #[must_use]
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|segment: &String| !segment.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for OptionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for OptionPath {
    fn from(dotted: &str) -> Self {
        Self::parse(dotted)
    }
}

impl From<String> for OptionPath {
    fn from(dotted: String) -> Self {
        Self::parse(&dotted)
    }
}

impl From<&[&str]> for OptionPath {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for OptionPath {
    fn from(segments: [&str; N]) -> Self {
        Self::from_segments(segments)
    }
}

/// Writes `value` at `path`, creating every missing intermediate mapping.
///
/// Absent or null intermediates become empty mappings. An intermediate that
/// holds any other non-mapping value is replaced by an empty mapping, so the
/// write always lands. The final segment is overwritten, never merged.
/// An empty path leaves the tree untouched.
pub fn set_path(root: &mut OptionsMap, path: &OptionPath, value: Value) {
    let Some((last, parents)) = path.segments().split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        node = descend_or_replace(node, segment);
    }
    trace!(path = %path, "set option");
    node.insert(last.clone(), value);
}

/// Reads the value stored at `path`, if every segment resolves through mappings.
#[must_use]
pub fn get_path<'a>(root: &'a OptionsMap, path: &OptionPath) -> Option<&'a Value> {
    let (last, parents) = path.segments().split_last()?;
    let mut node = root;
    for segment in parents {
        node = node.get(segment)?.as_object()?;
    }
    node.get(last)
}

/// Returns the mapping stored under `key`, creating it when absent or null.
///
/// Existing non-mapping values are kept as they are and reported as `None`.
pub fn ensure_object<'a>(node: &'a mut OptionsMap, key: &str) -> Option<&'a mut OptionsMap> {
    let slot = node.entry(key.to_owned()).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut()
}

/// Non-destructive counterpart of [`set_path`]: makes sure a mapping exists at
/// every segment of `path` and returns the innermost one.
pub fn ensure_path<'a>(node: &'a mut OptionsMap, path: &OptionPath) -> Option<&'a mut OptionsMap> {
    let mut current = node;
    for segment in path.segments() {
        current = ensure_object(current, segment)?;
    }
    Some(current)
}

/// Ensures `key` holds a mapping and scaffolds each dotted child path under it.
pub fn scaffold(root: &mut OptionsMap, key: &str, children: &[&str]) {
    let Some(section) = ensure_object(root, key) else {
        return;
    };
    for child in children {
        let _ = ensure_path(section, &OptionPath::parse(child));
    }
}

fn descend_or_replace<'a>(node: &'a mut OptionsMap, key: &str) -> &'a mut OptionsMap {
    let slot = node
        .entry(key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut().expect("slot was normalized to a mapping")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{OptionPath, OptionsMap, ensure_object, ensure_path, get_path, set_path};

    fn map(value: serde_json::Value) -> OptionsMap {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn parse_drops_empty_segments() {
        let path = OptionPath::parse(".xaxis..labels.");
        assert_eq!(path.segments(), ["xaxis", "labels"]);
        assert_eq!(path.to_string(), "xaxis.labels");
    }

    #[test]
    fn set_path_replaces_null_intermediates() {
        let mut root = map(json!({ "legend": null }));
        set_path(&mut root, &"legend.labels.colors".into(), json!("#333"));
        assert_eq!(
            serde_json::Value::Object(root),
            json!({ "legend": { "labels": { "colors": "#333" } } })
        );
    }

    #[test]
    fn set_path_replaces_scalar_intermediates() {
        let mut root = map(json!({ "grid": 4 }));
        set_path(&mut root, &"grid.padding.top".into(), json!(10));
        assert_eq!(
            serde_json::Value::Object(root),
            json!({ "grid": { "padding": { "top": 10 } } })
        );
    }

    #[test]
    fn set_path_with_empty_path_is_noop() {
        let mut root = map(json!({ "chart": { "type": "bar" } }));
        set_path(&mut root, &OptionPath::parse(""), json!(1));
        assert_eq!(
            serde_json::Value::Object(root),
            json!({ "chart": { "type": "bar" } })
        );
    }

    #[test]
    fn ensure_object_keeps_non_mapping_values() {
        let mut root = map(json!({ "colors": ["#fff"] }));
        assert!(ensure_object(&mut root, "colors").is_none());
        assert_eq!(root.get("colors"), Some(&json!(["#fff"])));
    }

    #[test]
    fn ensure_path_keeps_existing_leaves() {
        let mut root = map(json!({ "grid": { "xaxis": { "lines": { "show": true } } } }));
        let lines = ensure_path(&mut root, &"grid.xaxis.lines".into()).expect("mapping");
        assert_eq!(lines.get("show"), Some(&json!(true)));
    }

    #[test]
    fn get_path_stops_at_non_mapping() {
        let root = map(json!({ "series": [1, 2], "title": { "text": "T" } }));
        assert_eq!(get_path(&root, &"title.text".into()), Some(&json!("T")));
        assert_eq!(get_path(&root, &"series.0".into()), None);
    }
}
