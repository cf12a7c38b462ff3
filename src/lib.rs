pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use crate::core::catalog::{BuiltinFunction, CrossingRule, FunctionKind, RealFunction};
pub use crate::core::detector::{detect_checked, detect_discontinuities};
pub use crate::core::{engine::ScanEngine, pipeline::ScanPipeline};
pub use utils::error::{Result, ScanError};
