pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::error::{RomanError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

/// 合併 TOML 與命令列後的最終設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub output_format: OutputFormat,
    pub skip_blank_lines: bool,
    pub fail_fast: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Plain,
            skip_blank_lines: true,
            fail_fast: false,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            output_format: config.output_format(),
            skip_blank_lines: config.skip_blank_lines(),
            fail_fast: config.fail_fast(),
            verbose: config.verbose(),
        }
    }
}

impl ConfigProvider for Settings {
    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn skip_blank_lines(&self) -> bool {
        self.skip_blank_lines
    }

    fn fail_fast(&self) -> bool {
        self.fail_fast
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roman")]
#[command(about = "Convert Roman numerals to integers")]
pub struct CliConfig {
    /// Numerals to convert; read from --file or stdin when empty
    pub numerals: Vec<String>,

    /// File with one numeral per line
    #[arg(short, long, conflicts_with = "numerals")]
    pub file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Stop at the first invalid numeral
    #[arg(long)]
    pub fail_fast: bool,

    /// Treat blank lines as invalid numerals instead of skipping them
    #[arg(long)]
    pub keep_blank_lines: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 先讀 TOML（如有），再套用命令列覆蓋
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Settings::from_toml(&toml)
            }
            None => Settings::default(),
        };

        if let Some(format) = self.format {
            settings.output_format = format;
        }
        if self.fail_fast {
            settings.fail_fast = true;
        }
        if self.keep_blank_lines {
            settings.skip_blank_lines = false;
        }
        if self.verbose {
            settings.verbose = true;
        }

        Ok(settings)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            validate_path("file", file)?;

            // 兩種來源同時給定時不知道該讀哪一個
            if !self.numerals.is_empty() {
                return Err(RomanError::InvalidConfigValueError {
                    field: "file".to_string(),
                    value: file.clone(),
                    reason: "Cannot combine --file with numerals given as arguments"
                        .to_string(),
                });
            }
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
