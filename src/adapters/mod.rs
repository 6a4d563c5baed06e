// Adapters layer: concrete input sources (command line, files, stdin).

use crate::core::InputSource;
use crate::utils::error::Result;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Debug, Clone)]
pub struct ArgsSource {
    numerals: Vec<String>,
}

impl ArgsSource {
    pub fn new(numerals: Vec<String>) -> Self {
        Self { numerals }
    }
}

impl InputSource for ArgsSource {
    fn read_inputs(&self) -> Result<Vec<String>> {
        Ok(self.numerals.clone())
    }

    fn is_line_based(&self) -> bool {
        false
    }
}

/// 每行一個羅馬數字
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for FileSource {
    fn read_inputs(&self) -> Result<Vec<String>> {
        tracing::debug!("📁 Reading numerals from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        // lines() 會順便去掉 \r\n 的 \r
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Reads one numeral per line from any buffered reader, e.g. stdin.
pub struct ReaderSource<R: BufRead> {
    reader: Mutex<Option<R>>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(Some(reader)),
        }
    }
}

impl<R: BufRead> InputSource for ReaderSource<R> {
    fn read_inputs(&self) -> Result<Vec<String>> {
        let reader = match self.reader.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match reader {
            Some(reader) => Ok(reader.lines().collect::<std::io::Result<Vec<_>>>()?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_args_source() {
        let source = ArgsSource::new(vec!["X".to_string(), "iv".to_string()]);
        assert_eq!(source.read_inputs().unwrap(), vec!["X", "iv"]);
        assert!(!source.is_line_based());
        assert!(FileSource::new("numerals.txt").is_line_based());
    }

    #[test]
    fn test_file_source_handles_crlf() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"XIV\r\n mcm \r\n\r\nIL\n").unwrap();

        let source = FileSource::new(temp_file.path());
        assert_eq!(source.read_inputs().unwrap(), vec!["XIV", " mcm ", "", "IL"]);
    }

    #[test]
    fn test_file_source_missing_file() {
        let source = FileSource::new("/definitely/not/here/numerals.txt");
        assert!(source.read_inputs().is_err());
    }

    #[test]
    fn test_reader_source_is_consumed_once() {
        let source = ReaderSource::new(Cursor::new("I\nV\n"));
        assert_eq!(source.read_inputs().unwrap(), vec!["I", "V"]);
        assert!(source.read_inputs().unwrap().is_empty());
    }
}
