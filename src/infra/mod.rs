pub mod diagnostics;
pub mod file_fetcher;
pub mod http_client;

pub use diagnostics::{CollectingSink, TracingSink};
pub use file_fetcher::FileFetcher;
pub use http_client::HttpFetcher;
