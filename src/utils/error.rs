use std::num::ParseFloatError;
use thiserror::Error;

use crate::domain::model::NumericField;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("error opening document {document} for parse: {source}")]
    Open {
        document: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("error parsing {field} ({value:?}) as a decimal for document {document}: {source}")]
    Parse {
        document: String,
        field: NumericField,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad configuration; fix the invocation and rerun.
    Medium,
    /// Bad input data; the batch was rejected.
    High,
    /// Output could not be produced.
    Critical,
}

impl EtlError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorSeverity::Medium,
            EtlError::Open { .. } | EtlError::Parse { .. } | EtlError::ProcessingError { .. } => {
                ErrorSeverity::High
            }
            EtlError::ZipError(_)
            | EtlError::CsvError(_)
            | EtlError::IoError(_)
            | EtlError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// Document token the error is attached to, when it came from a spreadsheet.
    pub fn document(&self) -> Option<&str> {
        match self {
            EtlError::Open { document, .. } | EtlError::Parse { document, .. } => Some(document),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::Open { document, .. } => format!(
                "check that the {} spreadsheet exists and has a worksheet with the expected name",
                document
            ),
            EtlError::Parse { field, .. } => format!(
                "the {} column holds a non-numeric value; check whether the sheet layout changed",
                field
            ),
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => {
                "review the command line arguments or the TOML configuration".to_string()
            }
            EtlError::ProcessingError { .. } => "rerun with --verbose for details".to_string(),
            EtlError::ZipError(_)
            | EtlError::CsvError(_)
            | EtlError::IoError(_)
            | EtlError::SerializationError(_) => {
                "check that the output directory is writable and has free space".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_document_and_field() {
        let source = "N/A".parse::<f64>().unwrap_err();
        let err = EtlError::Parse {
            document: "remuneracao-de-todos-os-membros-ativos".to_string(),
            field: NumericField::Wage,
            value: "N/A".to_string(),
            source,
        };

        assert_eq!(err.document(), Some("remuneracao-de-todos-os-membros-ativos"));
        assert_eq!(err.severity(), ErrorSeverity::High);
        let message = err.to_string();
        assert!(message.contains("wage"));
        assert!(message.contains("remuneracao-de-todos-os-membros-ativos"));
    }

    #[test]
    fn test_config_errors_are_medium() {
        let err = EtlError::MissingConfigError {
            field: "files".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.document().is_none());
    }
}
