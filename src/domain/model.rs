use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Employment type labels as the institution publishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeType {
    #[serde(rename = "membro")]
    Member,
    #[serde(rename = "servidor")]
    Servant,
    #[serde(rename = "colaborador")]
    Collaborator,
    #[serde(rename = "pensionista")]
    Pensioner,
    #[serde(rename = "indefinido")]
    Undefined,
}

impl EmployeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::Member => "membro",
            EmployeeType::Servant => "servidor",
            EmployeeType::Collaborator => "colaborador",
            EmployeeType::Pensioner => "pensionista",
            EmployeeType::Undefined => "indefinido",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub reg: String,
    pub name: String,
    pub role: String,
    #[serde(rename = "type")]
    pub employee_type: EmployeeType,
    pub workplace: String,
    pub active: bool,
    pub income: IncomeDetails,
    pub discounts: Discount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeDetails {
    pub total: f64,
    pub wage: f64,
    pub perks: Perks,
    /// Not published by this source; kept so a future column has somewhere to go.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<OtherIncome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perks {
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherIncome {
    pub total: f64,
    #[serde(default)]
    pub others: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub total: f64,
    pub ceil_retention: f64,
    pub income_tax: f64,
    pub prev_contribution: f64,
}

/// The seven numeric columns of a payroll row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    DiscountsTotal,
    CeilRetention,
    IncomeTax,
    PrevContribution,
    IncomeTotal,
    Wage,
    PerksTotal,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NumericField::DiscountsTotal => "total discount",
            NumericField::CeilRetention => "ceil retention",
            NumericField::IncomeTax => "income tax",
            NumericField::PrevContribution => "prev contribution",
            NumericField::IncomeTotal => "total of income details",
            NumericField::Wage => "wage",
            NumericField::PerksTotal => "total of perks",
        };
        f.write_str(label)
    }
}

/// One sheet row as cell text.
pub type Row = Vec<String>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollReport {
    pub agency_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub files: Vec<String>,
    pub employees: Vec<Employee>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub employees: Vec<Employee>,
    pub json_output: Option<String>,
    pub csv_output: Option<String>,
}
