use std::sync::Arc;
use tracing::{debug, error};

use crate::app::ports::SourceFetcher;
use crate::error::{PortalError, Result};
use crate::schema::SourceSchema;

/// Retrieves the raw text of one group's source file without interpreting it
pub struct TabularLoader {
    fetcher: Arc<dyn SourceFetcher>,
}

impl TabularLoader {
    pub fn new(fetcher: Arc<dyn SourceFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_text(&self, schema: &SourceSchema) -> Result<String> {
        let path = schema.path.as_str();
        debug!(group = %schema.group, path, "Fetching source file");

        let resp = self.fetcher.fetch(path).await.map_err(|detail| {
            error!(path, %detail, "Source fetch failed");
            PortalError::Transport {
                path: path.to_string(),
                status: None,
                detail,
            }
        })?;

        if resp.status == 404 {
            error!(path, "Source file not found");
            return Err(PortalError::NotFound {
                path: path.to_string(),
            });
        }
        if !resp.is_success() {
            error!(path, status = resp.status, "Source fetch returned error status");
            return Err(PortalError::Transport {
                path: path.to_string(),
                status: Some(resp.status),
                detail: String::new(),
            });
        }
        if resp.body.trim().is_empty() {
            error!(path, "Source file is empty");
            return Err(PortalError::EmptyPayload {
                path: path.to_string(),
            });
        }

        Ok(resp.body)
    }
}
