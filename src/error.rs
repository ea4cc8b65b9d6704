use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Failed to retrieve {path}: {}", describe_status(.status, .detail))]
    Transport {
        path: String,
        status: Option<u16>,
        detail: String,
    },

    #[error("Source file is empty: {path}")]
    EmptyPayload { path: String },

    #[error("Error parsing {path} ({message} on row {row})")]
    Parse {
        path: String,
        message: String,
        row: u64,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe_status(status: &Option<u16>, detail: &str) -> String {
    match status {
        Some(code) => format!("HTTP status {code}"),
        None => detail.to_string(),
    }
}

impl PortalError {
    /// Text shown to visitors when a load fails
    pub fn user_message(&self) -> String {
        match self {
            PortalError::NotFound { path } => format!(
                "File not found: {path}. Make sure it's in the public directory."
            ),
            PortalError::Transport {
                status: Some(code), ..
            } => format!("Failed to load attendance data (status {code}). Please try again later."),
            PortalError::EmptyPayload { path } => {
                format!("Attendance file {path} is empty.")
            }
            PortalError::Parse { .. } => {
                "Attendance data could not be read. Please try again later.".to_string()
            }
            _ => "Failed to load attendance data. Please try again later.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
