use crate::domain::model::{Employee, Row, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human readable location of `path` once written.
    fn location(&self, path: &str) -> String;
}

/// Reads the payroll worksheet of one spreadsheet as rows of cell text.
pub trait SheetReader: Send + Sync {
    fn read_rows(&self, path: &Path, document: &str) -> Result<Vec<Row>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

pub trait ConfigProvider: Send + Sync {
    fn input_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn archive(&self) -> bool;
    fn sheet_name(&self) -> &str;
    /// `(month, year)` the batch refers to, when known.
    fn reference_period(&self) -> Option<(u32, i32)>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Employee>>;
    async fn transform(&self, data: Vec<Employee>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
