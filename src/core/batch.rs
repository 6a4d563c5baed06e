use crate::core::parser::RomanNumeralParser;
use crate::core::{BatchReport, ConfigProvider, Conversion, InputSource};
use crate::utils::error::Result;

pub struct BatchConverter<C: ConfigProvider> {
    parser: RomanNumeralParser,
    config: C,
}

impl<C: ConfigProvider> BatchConverter<C> {
    pub fn new(config: C) -> Self {
        Self {
            parser: RomanNumeralParser::new(),
            config,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Reads a source and converts what it yields.
    ///
    /// Blank lines are only skipped for line-based sources; an explicitly
    /// given empty input is reported as invalid.
    pub fn convert_source(&self, source: &dyn InputSource) -> Result<BatchReport> {
        let inputs = source.read_inputs()?;
        let skip_blank = self.config.skip_blank_lines() && source.is_line_based();
        self.convert_inputs(inputs, skip_blank)
    }

    /// Converts every input in order, treating them as lines.
    ///
    /// Invalid numerals are recorded in the report unless `fail_fast` is on,
    /// in which case the first one is returned as the error.
    pub fn convert_all<I, S>(&self, inputs: I) -> Result<BatchReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.convert_inputs(inputs, self.config.skip_blank_lines())
    }

    fn convert_inputs<I, S>(&self, inputs: I, skip_blank: bool) -> Result<BatchReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = BatchReport::default();
        let mut skipped = 0usize;

        for input in inputs {
            let input = input.as_ref();

            if skip_blank && input.trim().is_empty() {
                skipped += 1;
                continue;
            }

            match self.parser.to_int(input) {
                Ok(value) => report.conversions.push(Conversion::success(input, value)),
                Err(e) if self.config.fail_fast() => {
                    tracing::error!("❌ Stopping at first invalid numeral: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("⚠️ {}", e);
                    report.conversions.push(Conversion::failure(input, e.to_string()));
                }
            }
        }

        tracing::info!(
            "📊 Converted {} numerals ({} ok, {} invalid, {} blank skipped)",
            report.conversions.len(),
            report.succeeded(),
            report.failed(),
            skipped
        );

        Ok(report)
    }
}
