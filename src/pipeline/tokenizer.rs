use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;

use crate::error::{PortalError, Result};

/// One tokenized data row keyed by header name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line in the source file; the header is line 1
    pub line: u64,
    pub fields: HashMap<String, String>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Split `text` into header-keyed rows. Blank lines are skipped; a row whose
/// field count differs from the header aborts the whole batch.
pub fn tokenize(text: &str, path: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| parse_error(path, &e))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| parse_error(path, &e))?;
        rows.push(to_row(&headers, &record));
    }
    Ok(rows)
}

fn to_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let fields = headers
        .iter()
        .zip(record.iter())
        .map(|(h, v)| (h.to_string(), v.to_string()))
        .collect();
    RawRow { line, fields }
}

fn parse_error(path: &str, e: &csv::Error) -> PortalError {
    PortalError::Parse {
        path: path.to_string(),
        message: e.to_string(),
        row: e.position().map(|p| p.line()).unwrap_or_default(),
    }
}
