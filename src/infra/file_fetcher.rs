use crate::app::ports::{FetchResponse, SourceFetcher};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Serves source files out of a local public directory.
/// A missing file answers 404 so it maps the same way as over HTTP.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl SourceFetcher for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<FetchResponse, String> {
        let full = self.resolve(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FetchResponse::status(404)),
            Err(e) => Err(format!("{}: {}", full.display(), e)),
        }
    }
}
