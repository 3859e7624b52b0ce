mod path;
mod string;

pub use path::clean_path;
pub use string::{dedupe_preserving_order, is_dunder, split_list};
