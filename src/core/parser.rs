use crate::core::classifier::{document_token, DocumentCategory};
use crate::core::extractor::extract_employee;
use crate::core::filter::data_rows;
use crate::domain::model::Employee;
use crate::domain::ports::SheetReader;
use crate::utils::error::Result;
use std::path::Path;

/// Turns a batch of payroll spreadsheets into employee records.
pub struct PayrollParser<R: SheetReader> {
    reader: R,
}

impl<R: SheetReader> PayrollParser<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Records of every file, in file order then sheet order.
    ///
    /// The first file that cannot be read, or the first row with a bad
    /// numeric cell, fails the whole batch.
    pub fn parse<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Employee>> {
        let mut employees = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let document = document_token(path);
            if DocumentCategory::from_token(&document) == DocumentCategory::Unknown {
                tracing::warn!(
                    "Unrecognized document category {:?} in {}; using defaults",
                    document,
                    path.display()
                );
            }

            let rows = self.reader.read_rows(path, &document)?;
            let data = data_rows(&rows);
            tracing::debug!(
                "Document {} has {} rows, {} with employees",
                document,
                rows.len(),
                data.len()
            );

            for row in data {
                employees.push(extract_employee(row, &document)?);
            }
            tracing::info!("Parsed {} employees from {}", data.len(), path.display());
        }
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::cols;
    use crate::domain::model::{EmployeeType, Row};
    use crate::utils::error::EtlError;
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct MemoryReader {
        sheets: HashMap<PathBuf, Vec<Row>>,
        reads: Mutex<Vec<PathBuf>>,
    }

    impl MemoryReader {
        fn new() -> Self {
            Self {
                sheets: HashMap::new(),
                reads: Mutex::new(Vec::new()),
            }
        }

        fn with_sheet(mut self, path: &str, regs: &[&str]) -> Self {
            let mut rows = vec![vec!["MPPE".to_string()], vec![], vec!["Matrícula".to_string()]];
            rows.extend(regs.iter().map(|reg| data_row(reg, "0")));
            rows.push(vec!["TOTAL".to_string()]);
            self.sheets.insert(PathBuf::from(path), rows);
            self
        }

        fn with_rows(mut self, path: &str, rows: Vec<Row>) -> Self {
            self.sheets.insert(PathBuf::from(path), rows);
            self
        }
    }

    impl SheetReader for MemoryReader {
        fn read_rows(&self, path: &Path, document: &str) -> Result<Vec<Row>> {
            self.reads.lock().unwrap().push(path.to_path_buf());
            self.sheets.get(path).cloned().ok_or_else(|| EtlError::Open {
                document: document.to_string(),
                source: calamine::XlsxError::WorksheetNotFound("Sheet".to_string()),
            })
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn data_row(reg: &str, numeric: &str) -> Row {
        let mut row = vec![numeric.to_string(); cols::WIDTH];
        row[cols::REG] = reg.to_string();
        row[cols::NAME] = format!("Name {}", reg);
        row[cols::ROLE] = "ANALISTA".to_string();
        row
    }

    const MEMBERS: &str = "remuneracao-de-todos-os-membros-ativos-01-2020.xlsx";
    const PENSIONERS: &str = "valores-percebidos-por-todos-os-pensionistas-01-2020.xlsx";

    #[test]
    fn test_output_follows_input_order() {
        let reader = MemoryReader::new()
            .with_sheet(MEMBERS, &["A1", "A2", "A3"])
            .with_sheet(PENSIONERS, &["B1", "B2"]);
        let parser = PayrollParser::new(reader);

        let employees = parser.parse(&[MEMBERS, PENSIONERS]).unwrap();

        let regs: Vec<&str> = employees.iter().map(|e| e.reg.as_str()).collect();
        assert_eq!(regs, vec!["A1", "A2", "A3", "B1", "B2"]);
        assert_eq!(employees[0].employee_type, EmployeeType::Member);
        assert!(employees[0].active);
        assert_eq!(employees[4].employee_type, EmployeeType::Pensioner);
        assert!(!employees[4].active);
    }

    #[test]
    fn test_empty_batch() {
        let parser = PayrollParser::new(MemoryReader::new());
        let paths: Vec<PathBuf> = Vec::new();
        assert!(parser.parse(&paths).unwrap().is_empty());
    }

    #[test]
    fn test_short_sheet_yields_nothing() {
        let reader = MemoryReader::new().with_rows(MEMBERS, vec![vec![], vec![], vec![], vec![]]);
        let parser = PayrollParser::new(reader);

        assert!(parser.parse(&[MEMBERS]).unwrap().is_empty());
    }

    #[test]
    fn test_bad_row_aborts_batch() {
        let mut rows = vec![vec![], vec![], vec![]];
        rows.push(data_row("B1", "0"));
        let mut bad = data_row("B2", "0");
        bad[cols::WAGE] = "N/A".to_string();
        rows.push(bad);
        rows.push(vec![]);

        let reader = MemoryReader::new()
            .with_sheet(MEMBERS, &["A1"])
            .with_rows(PENSIONERS, rows)
            .with_sheet("proventos-de-todos-os-membros-inativos-01-2020.xlsx", &["C1"]);
        let parser = PayrollParser::new(reader);

        let err = parser
            .parse(&[
                MEMBERS,
                PENSIONERS,
                "proventos-de-todos-os-membros-inativos-01-2020.xlsx",
            ])
            .unwrap_err();

        assert!(matches!(err, EtlError::Parse { .. }));
        assert_eq!(err.document(), Some("valores-percebidos-por-todos-os-pensionistas"));
        // files after the failing one are never read
        assert_eq!(parser.reader.reads.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_unreadable_file_aborts_batch() {
        let reader = MemoryReader::new().with_sheet(MEMBERS, &["A1"]);
        let parser = PayrollParser::new(reader);

        let err = parser
            .parse(&[MEMBERS, "verbas-referentes-a-exercicios-anteriores-01-2020.xlsx"])
            .unwrap_err();

        assert!(matches!(err, EtlError::Open { .. }));
        assert_eq!(err.document(), Some("verbas-referentes-a-exercicios-anteriores"));
    }

    #[test]
    fn test_unknown_category_is_warned_once() {
        const DAILY_ALLOWANCES: &str = "relatorio-de-diarias-01-2020.xlsx";
        let reader = MemoryReader::new()
            .with_sheet(MEMBERS, &["A1"])
            .with_sheet(DAILY_ALLOWANCES, &["X1", "X2"]);
        let parser = PayrollParser::new(reader);

        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let logs = logs.clone();
                move || logs.clone()
            })
            .with_ansi(false)
            .finish();

        let employees = tracing::subscriber::with_default(subscriber, || {
            parser.parse(&[MEMBERS, DAILY_ALLOWANCES])
        })
        .unwrap();

        assert_eq!(employees.len(), 3);
        assert_eq!(employees[2].employee_type, EmployeeType::Undefined);
        assert!(employees[2].active);

        let output = logs.contents();
        let warnings: Vec<&str> = output.lines().filter(|line| line.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{}", output);
        assert!(warnings[0].contains("Unrecognized document category"));
        assert!(warnings[0].contains("\"relatorio-de-diarias\""));
    }
}
