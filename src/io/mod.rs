mod http;
mod local;

pub use http::HttpFile;
pub use local::LocalFile;

use async_trait::async_trait;
use thiserror::Error;

/// Failure to load a capsule, reported before any parsing happens
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("HTTP request failed with status: {0}")]
    Status(reqwest::StatusCode),

    #[error("max retries ({0}) exceeded")]
    RetriesExceeded(u32),
}

/// Somewhere a whole capsule image can be loaded from
#[async_trait]
pub trait CapsuleSource: Send + Sync {
    /// Load the entire capsule into memory
    async fn read_all(&self) -> Result<Vec<u8>, SourceError>;

    /// Path or URL, for diagnostics
    fn location(&self) -> &str;
}

pub fn is_http_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Pick a source for a command-line input: URLs are downloaded, anything
/// else is treated as a local path.
pub fn open(input: &str) -> Result<Box<dyn CapsuleSource>, SourceError> {
    if is_http_url(input) {
        Ok(Box::new(HttpFile::new(input.to_string())?))
    } else {
        Ok(Box::new(LocalFile::new(input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_detection() {
        assert!(is_http_url("http://example.com/X570.CAP"));
        assert!(is_http_url("https://example.com/X570.CAP"));
        assert!(!is_http_url("X570.CAP"));
        assert!(!is_http_url("./http/X570.CAP"));
        assert!(!is_http_url("ftp://example.com/X570.CAP"));
    }

    #[test]
    fn open_picks_source_by_input() {
        let local = open("bios/X570.CAP").unwrap();
        assert_eq!(local.location(), "bios/X570.CAP");

        let remote = open("https://example.com/X570.CAP").unwrap();
        assert_eq!(remote.location(), "https://example.com/X570.CAP");
    }
}
