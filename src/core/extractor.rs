use crate::core::classifier::DocumentCategory;
use crate::domain::model::{Discount, Employee, IncomeDetails, NumericField, Perks};
use crate::utils::error::{EtlError, Result};

pub const WORKPLACE: &str = "mppe";

/// Column indices of the payroll sheet layout.
pub mod cols {
    pub const REG: usize = 0;
    pub const NAME: usize = 1;
    pub const ROLE: usize = 2;
    pub const WAGE: usize = 4;
    pub const PERKS_TOTAL: usize = 6;
    pub const INCOME_TOTAL: usize = 10;
    pub const PREV_CONTRIBUTION: usize = 11;
    pub const INCOME_TAX: usize = 12;
    pub const CEIL_RETENTION: usize = 13;
    pub const DISCOUNTS_TOTAL: usize = 14;

    pub const WIDTH: usize = 15;
}

impl NumericField {
    pub fn column(&self) -> usize {
        match self {
            NumericField::DiscountsTotal => cols::DISCOUNTS_TOTAL,
            NumericField::CeilRetention => cols::CEIL_RETENTION,
            NumericField::IncomeTax => cols::INCOME_TAX,
            NumericField::PrevContribution => cols::PREV_CONTRIBUTION,
            NumericField::IncomeTotal => cols::INCOME_TOTAL,
            NumericField::Wage => cols::WAGE,
            NumericField::PerksTotal => cols::PERKS_TOTAL,
        }
    }
}

/// Builds one employee from a data row of the `document` sheet.
pub fn extract_employee(row: &[String], document: &str) -> Result<Employee> {
    let discounts = get_discounts(row, document)?;
    let income = get_income(row, document)?;
    let category = DocumentCategory::from_token(document);

    Ok(Employee {
        reg: cell(row, cols::REG).to_string(),
        name: cell(row, cols::NAME).to_string(),
        role: cell(row, cols::ROLE).to_string(),
        employee_type: category.employee_type(),
        workplace: WORKPLACE.to_string(),
        active: category.is_active(),
        income,
        discounts,
    })
}

fn get_discounts(row: &[String], document: &str) -> Result<Discount> {
    Ok(Discount {
        total: parse_numeric(row, NumericField::DiscountsTotal, document)?,
        ceil_retention: parse_numeric(row, NumericField::CeilRetention, document)?,
        income_tax: parse_numeric(row, NumericField::IncomeTax, document)?,
        prev_contribution: parse_numeric(row, NumericField::PrevContribution, document)?,
    })
}

fn get_income(row: &[String], document: &str) -> Result<IncomeDetails> {
    let total = parse_numeric(row, NumericField::IncomeTotal, document)?;
    let wage = parse_numeric(row, NumericField::Wage, document)?;
    let perks = Perks {
        total: parse_numeric(row, NumericField::PerksTotal, document)?,
    };

    Ok(IncomeDetails {
        total,
        wage,
        perks,
        other: None,
    })
}

fn parse_numeric(row: &[String], field: NumericField, document: &str) -> Result<f64> {
    let value = cell(row, field.column());
    value.parse::<f64>().map_err(|source| EtlError::Parse {
        document: document.to_string(),
        field,
        value: value.to_string(),
        source,
    })
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
