pub mod classifier;
pub mod etl;
pub mod extractor;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod storage;
pub mod workbook;

pub use crate::domain::model::{Employee, TransformResult};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, SheetReader, Storage};
pub use crate::utils::error::Result;
