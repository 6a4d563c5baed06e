use anyhow::Context;
use clap::Parser;
use roman_numeral::core::{ConfigProvider, InputSource};
use roman_numeral::utils::error::ErrorSeverity;
use roman_numeral::utils::{logger, validation::Validate};
use roman_numeral::{
    render, ArgsSource, BatchConverter, CliConfig, FileSource, ReaderSource, RomanError,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    logger::init_cli_logger(settings.verbose);
    tracing::debug!("Resolved settings: {:?}", settings);

    let source: Box<dyn InputSource> = if !config.numerals.is_empty() {
        Box::new(ArgsSource::new(config.numerals.clone()))
    } else if let Some(file) = &config.file {
        tracing::info!("📁 Reading numerals from: {}", file);
        Box::new(FileSource::new(file))
    } else {
        Box::new(ReaderSource::new(std::io::stdin().lock()))
    };

    let converter = BatchConverter::new(settings);
    let output_format = converter.config().output_format();

    match converter.convert_source(source.as_ref()) {
        Ok(report) => {
            let output = render(&report, output_format)
                .with_context(|| format!("failed to render {} output", output_format))?;
            if !output.is_empty() {
                println!("{}", output);
            }
            std::process::exit(report.exit_code());
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &RomanError) -> i32 {
    match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
