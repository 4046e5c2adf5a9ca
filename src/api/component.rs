use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::core::{OptionPath, OptionsMap, ensure_object, merge_scoped, set_path, to_fragment};

/// Capability shared by every options component.
///
/// A component is a view over the single tree owned by
/// [`ChartOptions`](super::ChartOptions): it holds a mutable borrow of that
/// tree, never a copy, so writes made through any component are visible through
/// the container and every component created afterwards.
pub trait OptionsComponent: Sized {
    /// Mapping this component writes into, or `None` when the tree no longer
    /// holds a mapping there.
    fn target_mut(&mut self) -> Option<&mut OptionsMap>;

    /// Sets `value` at `path` relative to the component's mapping, creating
    /// missing intermediate mappings.
    fn set_option(mut self, path: impl Into<OptionPath>, value: impl Into<Value>) -> Self {
        let path = path.into();
        match self.target_mut() {
            Some(target) => set_path(target, &path, value.into()),
            None => debug!(path = %path, "component mapping missing; skipping write"),
        }
        self
    }

    /// Merges `partial` into the child mapping at `key`.
    ///
    /// `deep_paths` lists the nested fields (relative to `key`) that are merged
    /// instead of replaced.
    fn merge_option<T: Serialize>(mut self, key: &str, partial: &T, deep_paths: &[&str]) -> Self {
        let Some(fragment) = to_fragment(partial, key) else {
            return self;
        };
        let Some(target) = self.target_mut() else {
            debug!(key, "component mapping missing; skipping merge");
            return self;
        };
        match ensure_object(target, key) {
            Some(child) => merge_scoped(child, fragment, deep_paths),
            None => debug!(key, "merge target is not a mapping; skipping merge"),
        }
        self
    }
}

/// Mapping stored under a top-level `key`, if it is one.
pub(crate) fn section_mut<'a>(root: &'a mut OptionsMap, key: &str) -> Option<&'a mut OptionsMap> {
    root.get_mut(key).and_then(Value::as_object_mut)
}
