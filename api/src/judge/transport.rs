//! HTTP seam between the judge client and the network.

use url::Url;

use super::JudgeError;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Something that can perform the single GET a judge evaluation needs.
///
/// Futures are not required to be `Send`: on the web they wrap browser
/// promises.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &Url) -> Result<RawResponse, JudgeError>;
}

/// `reqwest`-backed transport. Uses the client's default timeouts (none).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<RawResponse, JudgeError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| JudgeError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| JudgeError::Transport(err.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
