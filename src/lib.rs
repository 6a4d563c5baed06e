pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ArgsSource, FileSource, ReaderSource};
pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{
    batch::BatchConverter,
    parser::{to_int, RomanNumeral, RomanNumeralParser},
    render::{render, OutputFormat},
};
pub use utils::error::{Result, RomanError};
