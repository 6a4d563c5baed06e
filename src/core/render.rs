use crate::domain::model::BatchReport;
use crate::utils::error::{RomanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SUPPORTED_FORMATS: [&str; 3] = ["plain", "json", "csv"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(RomanError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.conversions)?),
        OutputFormat::Csv => render_csv(report),
    }
}

fn render_plain(report: &BatchReport) -> String {
    report
        .conversions
        .iter()
        .map(|c| match (&c.value, &c.error) {
            (Some(value), _) => format!("{}\t{}", c.input, value),
            (None, Some(error)) => format!("{}\terror: {}", c.input, error),
            (None, None) => format!("{}\terror: unknown", c.input),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_csv(report: &BatchReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["input", "value", "error"])?;

    for conversion in &report.conversions {
        let value = conversion.value.map(|v| v.to_string()).unwrap_or_default();
        let error = conversion.error.as_deref().unwrap_or("");
        writer.write_record([conversion.input.as_str(), value.as_str(), error])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RomanError::IoError(e.into_error()))?;
    let mut output = String::from_utf8(bytes).map_err(non_utf8_output)?;

    // 跟其他格式一致，結尾不帶換行
    if output.ends_with('\n') {
        output.pop();
    }
    Ok(output)
}

fn non_utf8_output(e: std::string::FromUtf8Error) -> RomanError {
    RomanError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Conversion;
    use crate::utils::error::ErrorCategory;

    fn sample_report() -> BatchReport {
        BatchReport {
            conversions: vec![
                Conversion::success("XIV", 14),
                Conversion::failure(
                    "IL",
                    "The input provided <IL> is not a valid roman numeral.".to_string(),
                ),
            ],
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" CSV ".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_render_plain() {
        let output = render(&sample_report(), OutputFormat::Plain).unwrap();
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "XIV\t14");
        assert_eq!(
            lines[1],
            "IL\terror: The input provided <IL> is not a valid roman numeral."
        );
    }

    #[test]
    fn test_render_json() {
        let output = render(&sample_report(), OutputFormat::Json).unwrap();
        let parsed: Vec<Conversion> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample_report().conversions);
    }

    #[test]
    fn test_render_csv() {
        let output = render(&sample_report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "input,value,error");
        assert_eq!(lines[1], "XIV,14,");
        assert_eq!(
            lines[2],
            "IL,,The input provided <IL> is not a valid roman numeral."
        );
        assert_eq!(lines.len(), 3);
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn test_non_utf8_output_is_a_system_error() {
        let bytes_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = non_utf8_output(bytes_err);

        assert_eq!(err.category(), ErrorCategory::System);
        assert!(matches!(
            err,
            RomanError::IoError(ref io) if io.kind() == std::io::ErrorKind::InvalidData
        ));
    }
}
