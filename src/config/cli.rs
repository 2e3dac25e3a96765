use crate::core::workbook::DEFAULT_SHEET_NAME;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mppe-parser")]
#[command(about = "Extracts MPPE payroll records from published spreadsheets")]
pub struct CliConfig {
    /// Spreadsheets to parse, in output order
    #[arg(value_delimiter = ',')]
    pub files: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(
        long = "format",
        value_enum,
        value_delimiter = ',',
        default_values_t = [OutputFormat::Json, OutputFormat::Csv]
    )]
    pub formats: Vec<OutputFormat>,

    #[arg(long, help = "Pack the outputs into a single zip archive")]
    pub archive: bool,

    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    pub sheet: String,

    #[arg(long, requires = "year")]
    pub month: Option<u32>,

    #[arg(long, requires = "month")]
    pub year: Option<i32>,

    #[arg(
        long,
        help = "Read settings from a TOML file instead of the arguments above",
        conflicts_with_all = ["files", "output_path", "formats", "archive", "sheet", "month", "year"]
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn input_files(&self) -> &[String] {
        &self.files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.formats
    }

    fn archive(&self) -> bool {
        self.archive
    }

    fn sheet_name(&self) -> &str {
        &self.sheet
    }

    fn reference_period(&self) -> Option<(u32, i32)> {
        self.month.zip(self.year)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        super::validate_settings(
            &self.files,
            &self.output_path,
            &self.formats,
            self.month,
            self.year,
        )
    }
}
