use super::{RemotePost, RemoteSource};
use crate::error::{QuotzError, Result};
use crate::model::Quote;
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP implementation of [`RemoteSource`]: GET fetches the remote post
/// list, POST pushes the local collection as JSON.
pub struct HttpRemote {
    client: Client,
    url: String,
}

impl HttpRemote {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| QuotzError::SyncUnavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl RemoteSource for HttpRemote {
    fn fetch(&self) -> Result<Vec<RemotePost>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| QuotzError::SyncUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuotzError::SyncUnavailable(format!(
                "fetch failed: {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| QuotzError::SyncUnavailable(format!("bad remote payload: {}", e)))
    }

    fn push(&self, quotes: &[Quote]) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(quotes)
            .send()
            .map_err(|e| QuotzError::SyncUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuotzError::SyncUnavailable(format!(
                "push failed: {}",
                response.status()
            )));
        }
        Ok(())
    }
}
