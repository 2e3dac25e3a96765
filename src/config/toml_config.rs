use crate::config::DEFAULT_OUTPUT_FORMATS;
use crate::core::workbook::DEFAULT_SHEET_NAME;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub period: Option<PeriodConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub files: Vec<String>,
    pub sheet: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub formats: Option<Vec<OutputFormat>>,
    pub archive: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub month: u32,
    pub year: i32,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_files(&self) -> &[String] {
        &self.source.files
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        self.load.formats.as_deref().unwrap_or(DEFAULT_OUTPUT_FORMATS)
    }

    fn archive(&self) -> bool {
        self.load.archive.unwrap_or(false)
    }

    fn sheet_name(&self) -> &str {
        self.source.sheet.as_deref().unwrap_or(DEFAULT_SHEET_NAME)
    }

    fn reference_period(&self) -> Option<(u32, i32)> {
        self.period.as_ref().map(|p| (p.month, p.year))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let period = self.reference_period();
        super::validate_settings(
            &self.source.files,
            &self.load.output_path,
            self.output_formats(),
            period.map(|(month, _)| month),
            period.map(|(_, year)| year),
        )
    }
}
