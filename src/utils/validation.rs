use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        validate_path(field_name, file)?;
        let extension = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str());

        match extension {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Month and year must be given together; the month must be a calendar month.
pub fn validate_period(month: Option<u32>, year: Option<i32>) -> Result<()> {
    match (month, year) {
        (Some(month), Some(_)) => validate_range("month", month, 1, 12),
        (None, None) => Ok(()),
        (Some(_), None) => Err(EtlError::MissingConfigError {
            field: "year".to_string(),
        }),
        (None, Some(_)) => Err(EtlError::MissingConfigError {
            field: "month".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec![
            "remuneracao-de-todos-os-membros-ativos-01-2020.xlsx".to_string(),
            "/tmp/valores-percebidos-por-todos-os-pensionistas-01-2020.xlsx".to_string(),
        ];
        assert!(validate_file_extensions("files", &files, &["xlsx"]).is_ok());

        let invalid_files = vec!["payroll.csv".to_string()];
        assert!(validate_file_extensions("files", &invalid_files, &["xlsx"]).is_err());

        let no_extension = vec!["payroll".to_string()];
        assert!(validate_file_extensions("files", &no_extension, &["xlsx"]).is_err());
    }

    #[test]
    fn test_validate_period() {
        assert!(validate_period(None, None).is_ok());
        assert!(validate_period(Some(1), Some(2020)).is_ok());
        assert!(validate_period(Some(12), Some(2020)).is_ok());
        assert!(validate_period(Some(0), Some(2020)).is_err());
        assert!(validate_period(Some(13), Some(2020)).is_err());
        assert!(validate_period(Some(1), None).is_err());
        assert!(validate_period(None, Some(2020)).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list::<String>("files", &[]).is_err());
        assert!(validate_non_empty_list("files", &["a.xlsx"]).is_ok());
    }
}
