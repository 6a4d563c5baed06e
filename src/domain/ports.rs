use crate::core::render::OutputFormat;
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn output_format(&self) -> OutputFormat;
    fn skip_blank_lines(&self) -> bool;
    fn fail_fast(&self) -> bool;
}

/// Anything that yields raw numeral strings to convert.
pub trait InputSource {
    fn read_inputs(&self) -> Result<Vec<String>>;

    /// 逐行讀取的來源才會有空白分隔行；明確給定的輸入一律要轉換
    fn is_line_based(&self) -> bool {
        true
    }
}
