use std::sync::Arc;

use crate::app::ports::{DiagnosticSink, IssueKind, RowIssue};
use crate::constants::ELIGIBILITY_THRESHOLD;
use crate::domain::Record;
use crate::pipeline::tokenizer::RawRow;
use crate::schema::SourceSchema;

/// Turns tokenized rows into records using a per-source column schema.
/// Bad identifiers and missing names drop the row; a bad percentage keeps
/// the row at 0%.
pub struct RowNormalizer {
    sink: Arc<dyn DiagnosticSink>,
}

impl RowNormalizer {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn normalize(&self, row: &RawRow, schema: &SourceSchema) -> Option<Record> {
        let raw_id = row.get(schema.identifier_column);
        let identifier = match raw_id.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(id) => id,
            None => {
                self.report(schema, row, IssueKind::InvalidIdentifier, raw_id);
                return None;
            }
        };

        let display_name = row
            .get(schema.name_column)
            .map(str::trim)
            .unwrap_or_default();
        if display_name.is_empty() {
            self.report(schema, row, IssueKind::MissingName, None);
            return None;
        }

        let raw_percentage = row.get(schema.percentage_column);
        let cleaned = clean_percentage(raw_percentage);
        let parsed = parse_percentage(&cleaned);
        if parsed.is_none() && cleaned != "0" {
            self.report(schema, row, IssueKind::InvalidPercentage, raw_percentage);
        }

        // Threshold uses the unrounded value: 79.6 displays as 80 but is not eligible
        let is_eligible = parsed.map_or(false, |p| p >= ELIGIBILITY_THRESHOLD);
        let attendance_percentage = parsed.map_or(0, round_half_up);

        let portrait_reference = schema
            .portrait_column
            .and_then(|column| row.get(column))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Some(Record {
            identifier,
            display_name: display_name.to_string(),
            attendance_percentage,
            group: schema.group,
            is_eligible,
            portrait_reference,
        })
    }

    pub fn normalize_batch(&self, rows: &[RawRow], schema: &SourceSchema) -> Vec<Record> {
        rows.iter()
            .filter_map(|row| self.normalize(row, schema))
            .collect()
    }

    fn report(&self, schema: &SourceSchema, row: &RawRow, kind: IssueKind, raw: Option<&str>) {
        self.sink.record_issue(RowIssue {
            group: schema.group,
            row: row.line,
            kind,
            raw: raw.map(str::to_string),
        });
    }
}

/// Strip one trailing `%` and surrounding whitespace; absent or blank reads as "0"
fn clean_percentage(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return "0".to_string();
    }
    trimmed.strip_suffix('%').unwrap_or(trimmed).trim().to_string()
}

fn parse_percentage(cleaned: &str) -> Option<f64> {
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
