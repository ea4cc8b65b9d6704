use crate::app::ports::{DiagnosticSink, RowIssue};
use std::sync::Mutex;
use tracing::warn;

/// Logs every row issue as a warning
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record_issue(&self, issue: RowIssue) {
        warn!(
            group = %issue.group,
            row = issue.row,
            kind = ?issue.kind,
            dropped = issue.kind.drops_row(),
            "{}",
            issue
        );
    }
}

/// Keeps row issues in memory for later inspection
#[derive(Default)]
pub struct CollectingSink {
    issues: Mutex<Vec<RowIssue>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> Vec<RowIssue> {
        match self.issues.lock() {
            Ok(issues) => issues.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn record_issue(&self, issue: RowIssue) {
        match self.issues.lock() {
            Ok(mut issues) => issues.push(issue),
            Err(poisoned) => poisoned.into_inner().push(issue),
        }
    }
}
