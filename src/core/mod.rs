pub mod batch;
pub mod parser;
pub mod render;

pub use crate::domain::model::{BatchReport, Conversion};
pub use crate::domain::ports::{ConfigProvider, InputSource};
pub use crate::utils::error::Result;
