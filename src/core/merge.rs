use serde_json::Value;

use super::tree::{OptionsMap, ensure_object};

/// Copies every key of `fragment` into `target`; untouched keys survive.
pub fn shallow_merge(target: &mut OptionsMap, fragment: OptionsMap) {
    for (key, value) in fragment {
        target.insert(key, value);
    }
}

/// Shallow merge that also merges (instead of replacing) the nested mappings
/// named by `deep_paths`.
///
/// Each entry of `deep_paths` is a dotted path relative to `target`. A nested
/// path only takes effect when its parent is listed too, e.g. `labels` and
/// `labels.name`. Fields outside the list are replaced wholesale.
pub fn merge_scoped(target: &mut OptionsMap, fragment: OptionsMap, deep_paths: &[&str]) {
    if deep_paths.is_empty() {
        shallow_merge(target, fragment);
        return;
    }
    merge_under(target, fragment, "", deep_paths);
}

fn merge_under(target: &mut OptionsMap, fragment: OptionsMap, prefix: &str, deep_paths: &[&str]) {
    for (key, value) in fragment {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Object(nested) if deep_paths.contains(&path.as_str()) => {
                match ensure_object(target, &key) {
                    Some(child) => merge_under(child, nested, &path, deep_paths),
                    None => {
                        target.insert(key, Value::Object(nested));
                    }
                }
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}
