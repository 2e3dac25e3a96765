#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_list, validate_path, validate_period,
};

pub const DEFAULT_OUTPUT_FORMATS: &[OutputFormat] = &[OutputFormat::Json, OutputFormat::Csv];

/// Checks shared by every configuration source.
pub(crate) fn validate_settings(
    files: &[String],
    output_path: &str,
    formats: &[OutputFormat],
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    validate_non_empty_list("files", files)?;
    validate_file_extensions("files", files, &["xlsx"])?;
    validate_path("output_path", output_path)?;
    validate_non_empty_list("output_formats", formats)?;
    validate_period(month, year)
}
