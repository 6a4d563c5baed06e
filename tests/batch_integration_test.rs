use anyhow::Result;
use roman_numeral::core::InputSource;
use roman_numeral::{
    render, BatchConverter, FileSource, OutputFormat, ReaderSource, RomanError, Settings,
    TomlConfig,
};
use std::io::{Cursor, Write};
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_file_to_plain_output() -> Result<()> {
    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(b"MCMXCIX\n\n  xliv \nIL\n")?;

    let inputs = FileSource::new(input_file.path()).read_inputs()?;
    let report = BatchConverter::new(Settings::default()).convert_all(&inputs)?;

    assert_eq!(report.conversions.len(), 3);
    assert_eq!(report.failed(), 1);

    let output = render(&report, OutputFormat::Plain)?;
    assert_eq!(
        output,
        "MCMXCIX\t1999\n  xliv \t44\nIL\terror: The input provided <IL> is not a valid roman numeral."
    );
    Ok(())
}

#[test]
fn test_toml_driven_json_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("roman.toml");
    std::fs::write(
        &config_path,
        r#"
[output]
format = "json"

[input]
skip_blank_lines = true
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    let settings = Settings::from_toml(&config);
    assert_eq!(settings.output_format, OutputFormat::Json);

    let source = ReaderSource::new(Cursor::new("XIV\n \nLM\n"));
    let report = BatchConverter::new(settings.clone()).convert_all(source.read_inputs()?)?;
    let output = render(&report, settings.output_format)?;

    let json: serde_json::Value = serde_json::from_str(&output)?;
    let items = json.as_array().expect("json array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["input"], "XIV");
    assert_eq!(items[0]["value"], 14);
    assert!(items[0]["error"].is_null());
    assert_eq!(items[1]["input"], "LM");
    assert!(items[1]["value"].is_null());
    assert_eq!(
        items[1]["error"],
        "The input provided <LM> is not a valid roman numeral."
    );
    Ok(())
}

#[test]
fn test_fail_fast_from_toml() -> Result<()> {
    let config = TomlConfig::from_toml_str("[input]\nfail_fast = true\n")?;
    let converter = BatchConverter::new(config);

    let err = converter
        .convert_all(["X", "$", "V"])
        .expect_err("fail_fast should stop at '$'");
    assert!(matches!(err, RomanError::InvalidNumeralError { ref input } if input == "$"));
    assert_eq!(
        err.user_friendly_message(),
        "The input provided <$> is not a valid roman numeral."
    );
    Ok(())
}

#[test]
fn test_csv_output_for_clean_batch() -> Result<()> {
    let report = BatchConverter::new(Settings::default()).convert_all(["iv", "ix", "XL"])?;
    assert!(report.is_clean());

    let output = render(&report, OutputFormat::Csv)?;
    assert_eq!(output, "input,value,error\niv,4,\nix,9,\nXL,40,");
    Ok(())
}
