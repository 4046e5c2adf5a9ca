use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{OptionsMap, number_value, scaffold, sequence_value};

use super::component::{OptionsComponent, section_mut};

const KEY: &str = "markers";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerHover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Grows the hovered marker by this many pixels when `size` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_offset: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct Markers<'a> {
    root: &'a mut OptionsMap,
}

impl<'a> Markers<'a> {
    pub(crate) fn attach(root: &'a mut OptionsMap) -> Self {
        debug!(component = KEY, "attach component");
        scaffold(root, KEY, &["hover"]);
        Self { root }
    }

    /// Single size, or one size per series when given a sequence.
    pub fn size(self, size: impl Into<Value>) -> Self {
        self.set_option("size", size)
    }

    pub fn colors<I, S>(self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = colors.into_iter().map(|color| Value::String(color.into()));
        self.set_option("colors", sequence_value(colors))
    }

    pub fn stroke_width(self, width: f64) -> Self {
        self.set_option("strokeWidth", number_value(width))
    }

    pub fn stroke_colors(self, color: impl Into<Value>) -> Self {
        self.set_option("strokeColors", color)
    }

    /// `"circle"`, `"square"` or `"rect"`.
    pub fn shape(self, shape: impl Into<String>) -> Self {
        self.set_option("shape", Value::String(shape.into()))
    }

    pub fn hover(self, hover: MarkerHover) -> Self {
        self.merge_option("hover", &hover, &[])
    }
}

impl OptionsComponent for Markers<'_> {
    fn target_mut(&mut self) -> Option<&mut OptionsMap> {
        section_mut(self.root, KEY)
    }
}
