pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use crate::core::{
    classifier::classify, etl::EtlEngine, parser::PayrollParser, pipeline::PayrollPipeline,
    storage::LocalStorage, workbook::XlsxSheetReader,
};
pub use domain::model::{Discount, Employee, EmployeeType, IncomeDetails, Perks};
pub use utils::error::{EtlError, Result};
