pub mod fragment;
pub mod merge;
pub mod primitives;
pub mod tree;

pub use fragment::{to_fragment, to_option_value, value_kind};
pub use merge::{merge_scoped, shallow_merge};
pub use primitives::{datetime_to_epoch_millis, number_value, sequence_value};
pub use tree::{OptionPath, OptionsMap, ensure_object, ensure_path, get_path, scaffold, set_path};
