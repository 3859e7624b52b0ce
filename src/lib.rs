/// pystub
///
/// Scans Python source with Tree-sitter, catalogs the functions worth testing
/// and writes a skeleton unittest or pytest module for each source module.
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod runner;
pub mod scanner;
pub mod utils;

pub use config::{Config, RenderConfig};
pub use error::{Error, Result};
pub use render::TestModuleRenderer;
pub use runner::{RunSummary, Runner};
pub use scanner::{FunctionDescriptor, Scanner, SourceModule};
