use crate::config::OutputFormat;
use crate::error::AppError;
use colored::Colorize;
use std::io::Write;

/// One computed answer, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Which drill produced the answer ("coins", "brackets", ...).
    pub component: &'static str,
    /// The input, rendered the way it would be written in a call.
    pub input: String,
    /// The computed answer.
    pub result: String,
    /// The answer the demo expects, if this record comes from the demo.
    pub expected: Option<String>,
}

impl Record {
    /// Creates a record with no expected answer attached.
    pub fn new(component: &'static str, input: String, result: impl ToString) -> Self {
        Self {
            component,
            input,
            result: result.to_string(),
            expected: None,
        }
    }

    /// Attaches the expected answer.
    #[must_use]
    pub fn expecting(mut self, expected: impl ToString) -> Self {
        self.expected = Some(expected.to_string());
        self
    }

    /// False only when an expected answer is present and differs.
    pub fn passed(&self) -> bool {
        self.expected.as_ref().map_or(true, |e| *e == self.result)
    }
}

/// Writes `records` to `writer` in the requested format.
///
/// Text output is one line per record, prefixed with PASS/FAIL when an
/// expected answer is attached. CSV output always carries a header row.
pub fn write_records<W: Write>(
    records: &[Record],
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            for record in records {
                let line = format!("{}({}) = {}", record.component, record.input, record.result);
                match &record.expected {
                    None => writeln!(writer, "{line}")?,
                    Some(_) if record.passed() => {
                        writeln!(writer, "{} {line}", "PASS".green())?;
                    }
                    Some(expected) => {
                        writeln!(writer, "{} {line} (expected {expected})", "FAIL".red())?;
                    }
                }
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut *writer);
            wtr.write_record(["component", "input", "result", "expected", "status"])?;
            for record in records {
                let status = match (&record.expected, record.passed()) {
                    (None, _) => "",
                    (Some(_), true) => "pass",
                    (Some(_), false) => "fail",
                };
                wtr.write_record([
                    record.component,
                    record.input.as_str(),
                    record.result.as_str(),
                    record.expected.as_deref().unwrap_or(""),
                    status,
                ])?;
            }
            wtr.flush()?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_plain_record() {
        let records = vec![Record::new("coins", "15, [1, 5]".into(), 4)];
        let mut out = Vec::new();
        write_records(&records, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "coins(15, [1, 5]) = 4\n");
    }

    #[test]
    fn test_text_marks_pass_and_fail() {
        colored::control::set_override(false);
        let records = vec![
            Record::new("brackets", "\"()\"".into(), true).expecting(true),
            Record::new("brackets", "\"(\"".into(), true).expecting(false),
        ];
        let mut out = Vec::new();
        write_records(&records, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("PASS brackets(\"()\") = true"));
        assert!(text.contains("FAIL brackets(\"(\") = true (expected false)"));
    }

    #[test]
    fn test_csv_quotes_inputs() {
        let records = vec![
            Record::new("window", "\"abc\", {a}".into(), 1),
            Record::new("coins", "0, []".into(), 1).expecting(1),
        ];
        let mut out = Vec::new();
        write_records(&records, OutputFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("component,input,result,expected,status"));
        assert_eq!(lines.next(), Some("window,\"\"\"abc\"\", {a}\",1,,"));
        assert_eq!(lines.next(), Some("coins,\"0, []\",1,1,pass"));
    }

    #[test]
    fn test_passed_without_expectation() {
        assert!(Record::new("coins", String::new(), 1).passed());
        assert!(!Record::new("coins", String::new(), 1).expecting(2).passed());
    }
}
