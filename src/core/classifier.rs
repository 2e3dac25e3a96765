//! Classifies a payroll spreadsheet from its file name.
//!
//! Published files are named `<category>-MM-YYYY.xlsx`. The category token is
//! what remains of the base name once the 13 character date/extension suffix
//! is dropped, and it alone decides the employment type and active status of
//! every record in the file.

use crate::domain::model::EmployeeType;
use std::path::Path;

/// Length of the `-MM-YYYY.xlsx` suffix.
pub const DATE_SUFFIX_LEN: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCategory {
    InactiveMembers,
    InactiveServants,
    ActiveMembers,
    ActiveServants,
    Collaborators,
    Pensioners,
    PreviousYearsFunds,
    IndemnitiesAndTemporaryPay,
    Unknown,
}

/// Tokens as they appear in published file names, spelling included.
const CATEGORY_TOKENS: &[(&str, DocumentCategory)] = &[
    (
        "proventos-de-todos-os-membros-inativos",
        DocumentCategory::InactiveMembers,
    ),
    (
        "proventos-de-todos-os-servidores-inativos",
        DocumentCategory::InactiveServants,
    ),
    (
        "remuneracao-de-todos-os-membros-ativos",
        DocumentCategory::ActiveMembers,
    ),
    (
        "remuneracao-de-todos-os-servidores-atuvos",
        DocumentCategory::ActiveServants,
    ),
    (
        "valores-percebidos-por-todos-os-colaboradores",
        DocumentCategory::Collaborators,
    ),
    (
        "valores-percebidos-por-todos-os-pensionistas",
        DocumentCategory::Pensioners,
    ),
    (
        "verbas-referentes-a-exercicios-anteriores",
        DocumentCategory::PreviousYearsFunds,
    ),
    (
        "verbas-indenizatorias-e-outras-remuneracoes-temporarias",
        DocumentCategory::IndemnitiesAndTemporaryPay,
    ),
];

impl DocumentCategory {
    pub fn from_token(token: &str) -> Self {
        CATEGORY_TOKENS
            .iter()
            .find(|(known, _)| *known == token)
            .map(|(_, category)| *category)
            .unwrap_or(DocumentCategory::Unknown)
    }

    pub fn employee_type(&self) -> EmployeeType {
        match self {
            DocumentCategory::InactiveMembers | DocumentCategory::ActiveMembers => {
                EmployeeType::Member
            }
            DocumentCategory::InactiveServants | DocumentCategory::ActiveServants => {
                EmployeeType::Servant
            }
            DocumentCategory::Collaborators => EmployeeType::Collaborator,
            DocumentCategory::Pensioners => EmployeeType::Pensioner,
            DocumentCategory::PreviousYearsFunds
            | DocumentCategory::IndemnitiesAndTemporaryPay
            | DocumentCategory::Unknown => EmployeeType::Undefined,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            DocumentCategory::InactiveMembers
            | DocumentCategory::InactiveServants
            | DocumentCategory::PreviousYearsFunds
            | DocumentCategory::IndemnitiesAndTemporaryPay
            | DocumentCategory::Pensioners => false,
            DocumentCategory::ActiveMembers
            | DocumentCategory::ActiveServants
            | DocumentCategory::Collaborators
            | DocumentCategory::Unknown => true,
        }
    }
}

/// Base name of `path` without its date/extension suffix.
///
/// Names shorter than the suffix give an empty token.
pub fn document_token(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let chars: Vec<char> = base.chars().collect();
    let keep = chars.len().saturating_sub(DATE_SUFFIX_LEN);
    chars[..keep].iter().collect()
}

pub fn classify(path: &Path) -> (EmployeeType, bool) {
    let category = DocumentCategory::from_token(&document_token(path));
    (category.employee_type(), category.is_active())
}
