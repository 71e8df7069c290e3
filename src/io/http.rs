use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use super::{CapsuleSource, SourceError};

/// Capsule downloaded from an HTTP(S) URL
pub struct HttpFile {
    client: Client,
    url: String,
    max_retry: u32,
}

impl HttpFile {
    pub fn new(url: String) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            url,
            max_retry: 10,
        })
    }
}

#[async_trait]
impl CapsuleSource for HttpFile {
    async fn read_all(&self) -> Result<Vec<u8>, SourceError> {
        let mut retry_count = 0;

        loop {
            match self.client.get(&self.url).send().await {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        return Err(SourceError::Status(resp.status()));
                    }

                    let bytes = resp.bytes().await?;
                    debug!(url = %self.url, size = bytes.len(), "downloaded capsule");
                    return Ok(bytes.to_vec());
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        return Err(SourceError::RetriesExceeded(self.max_retry));
                    }
                    warn!(
                        "Connection error, retry {}/{}: {}",
                        retry_count, self.max_retry, e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn location(&self) -> &str {
        &self.url
    }
}
