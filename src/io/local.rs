use super::{CapsuleSource, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Capsule stored on the local filesystem
pub struct LocalFile {
    path: PathBuf,
    display: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl CapsuleSource for LocalFile {
    async fn read_all(&self) -> Result<Vec<u8>, SourceError> {
        let data = tokio::fs::read(&self.path).await?;
        debug!(path = %self.display, size = data.len(), "read capsule");
        Ok(data)
    }

    fn location(&self) -> &str {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x19\x4F capsule bytes").unwrap();

        let source = LocalFile::new(file.path());
        assert_eq!(source.read_all().await.unwrap(), b"\x19\x4F capsule bytes");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalFile::new(dir.path().join("missing.CAP"));

        match source.read_all().await {
            Err(SourceError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected NotFound, got {:?}", other.map(|d| d.len())),
        }
    }
}
