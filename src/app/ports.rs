use async_trait::async_trait;

use crate::domain::Group;

// Load-side ports
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Retrieve the file at `path`. `Err` only for failures that never
    /// produced a status (connection refused, unreadable file, ...).
    async fn fetch(&self, path: &str) -> Result<FetchResponse, String>;
}

#[derive(Clone, Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: String::new() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// Row-level diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn record_issue(&self, issue: RowIssue);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowIssue {
    pub group: Group,
    /// 1-based line in the source file
    pub row: u64,
    pub kind: IssueKind,
    pub raw: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    InvalidIdentifier,
    MissingName,
    InvalidPercentage,
}

impl IssueKind {
    /// Whether the row was dropped from the result set
    pub fn drops_row(&self) -> bool {
        !matches!(self, IssueKind::InvalidPercentage)
    }
}

impl std::fmt::Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let raw = self.raw.as_deref().unwrap_or("");
        match self.kind {
            IssueKind::InvalidIdentifier => write!(
                f,
                "Invalid identifier in group {} row {}: {:?}. Skipping row.",
                self.group, self.row, raw
            ),
            IssueKind::MissingName => write!(
                f,
                "Missing name in group {} row {}. Skipping row.",
                self.group, self.row
            ),
            IssueKind::InvalidPercentage => write!(
                f,
                "Invalid percentage in group {} row {}: {:?}. Setting attendance to 0.",
                self.group, self.row, raw
            ),
        }
    }
}
