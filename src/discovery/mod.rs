pub mod filter;
pub mod utils;

pub use filter::{expand_input, is_business_module, SourceFilter};
pub use utils::{identity_key, module_stem, walk_source_files, PYTHON_EXTENSION};
