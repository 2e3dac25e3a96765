use crate::core::extractor::WORKPLACE;
use crate::core::parser::PayrollParser;
use crate::core::{ConfigProvider, Employee, OutputFormat, Pipeline, Storage, TransformResult};
use crate::domain::model::PayrollReport;
use crate::domain::ports::SheetReader;
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct PayrollPipeline<S: Storage, C: ConfigProvider, R: SheetReader> {
    storage: S,
    config: C,
    parser: PayrollParser<R>,
}

impl<S: Storage, C: ConfigProvider, R: SheetReader> PayrollPipeline<S, C, R> {
    pub fn new(storage: S, config: C, reader: R) -> Self {
        Self {
            storage,
            config,
            parser: PayrollParser::new(reader),
        }
    }

    fn file_stem(&self) -> String {
        match self.config.reference_period() {
            Some((month, year)) => format!("{}-{:04}-{:02}", WORKPLACE, year, month),
            None => WORKPLACE.to_string(),
        }
    }

    fn wants(&self, format: OutputFormat) -> bool {
        self.config.output_formats().contains(&format)
    }

    fn build_report(&self, employees: Vec<Employee>) -> PayrollReport {
        let period = self.config.reference_period();
        PayrollReport {
            agency_id: WORKPLACE.to_string(),
            month: period.map(|(month, _)| month),
            year: period.map(|(_, year)| year),
            files: self.config.input_files().to_vec(),
            employees,
            generated_at: chrono::Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    reg: &'a str,
    name: &'a str,
    role: &'a str,
    #[serde(rename = "type")]
    employee_type: &'static str,
    workplace: &'a str,
    active: bool,
    income_total: f64,
    wage: f64,
    perks_total: f64,
    discounts_total: f64,
    ceil_retention: f64,
    income_tax: f64,
    prev_contribution: f64,
}

impl<'a> From<&'a Employee> for CsvRow<'a> {
    fn from(employee: &'a Employee) -> Self {
        Self {
            reg: &employee.reg,
            name: &employee.name,
            role: &employee.role,
            employee_type: employee.employee_type.as_str(),
            workplace: &employee.workplace,
            active: employee.active,
            income_total: employee.income.total,
            wage: employee.income.wage,
            perks_total: employee.income.perks.total,
            discounts_total: employee.discounts.total,
            ceil_retention: employee.discounts.ceil_retention,
            income_tax: employee.discounts.income_tax,
            prev_contribution: employee.discounts.prev_contribution,
        }
    }
}

fn to_csv(employees: &[Employee]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for employee in employees {
        writer.serialize(CsvRow::from(employee))?;
    }
    let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, R: SheetReader> Pipeline for PayrollPipeline<S, C, R> {
    async fn extract(&self) -> Result<Vec<Employee>> {
        let files = self.config.input_files();
        tracing::debug!("Parsing {} payroll files", files.len());
        self.parser.parse(files)
    }

    async fn transform(&self, data: Vec<Employee>) -> Result<TransformResult> {
        let csv_output = if self.wants(OutputFormat::Csv) {
            Some(to_csv(&data)?)
        } else {
            None
        };

        let report = self.build_report(data);
        let json_output = if self.wants(OutputFormat::Json) {
            Some(serde_json::to_string_pretty(&report)?)
        } else {
            None
        };

        Ok(TransformResult {
            employees: report.employees,
            json_output,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let stem = self.file_stem();
        let mut outputs: Vec<(String, String)> = Vec::new();
        if let Some(json) = result.json_output {
            outputs.push((format!("{}.json", stem), json));
        }
        if let Some(csv) = result.csv_output {
            outputs.push((format!("{}.csv", stem), csv));
        }

        if outputs.is_empty() {
            return Err(EtlError::MissingConfigError {
                field: "output_formats".to_string(),
            });
        }

        if self.config.archive() {
            let archive_name = format!("{}.zip", stem);
            tracing::debug!("Creating ZIP file with {} files", outputs.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, content) in &outputs {
                    zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                    zip.write_all(content.as_bytes())?;
                }
                zip.finish()?.into_inner()
            };

            self.storage.write_file(&archive_name, &zip_data).await?;
            return Ok(self.storage.location(&archive_name));
        }

        let mut locations = Vec::with_capacity(outputs.len());
        for (name, content) in &outputs {
            self.storage.write_file(name, content.as_bytes()).await?;
            locations.push(self.storage.location(name));
        }
        Ok(locations.join(", "))
    }
}
