//! Remote judge: asks a text-generation endpoint to score a routine.
//!
//! One evaluation is one GET whose last path segment is the whole prompt.
//! The reply is free text; [`parse_response`] looks for a `SCORE: <n>` token
//! and everything else becomes advice. [`JudgeClient::evaluate`] never fails:
//! transport errors, bad statuses and unparseable replies all come back as a
//! [`JudgeResult`] with score 0 and a message saying what went wrong.

mod parse;
mod prompt;
mod transport;

pub use parse::{parse_response, ParseError, SCORE_PREFIX};
pub use prompt::{build_prompt, describe_routine, request_url};
pub use transport::{HttpTransport, RawResponse, Transport};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::routine::RoutineInput;

/// Public text-generation endpoint used unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://text.pollinations.ai/";

/// Environment variable overriding [`DEFAULT_BASE_URL`] on native builds.
pub const BASE_URL_ENV: &str = "LIFERHYTHM_JUDGE_URL";

/// Advice shown when the judge answers with a non-200 status. Fallback
/// advice is Korean, like the advice the judge is asked to write.
pub const CONNECTION_ERROR_ADVICE: &str = "AI 서버 연결 오류입니다.";

/// Score and advice from one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeResult {
    pub score: u32,
    pub advice: String,
}

impl JudgeResult {
    fn failed(advice: String) -> Self {
        Self { score: 0, advice }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    #[error("judge answered with HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid judge endpoint `{0}`")]
    InvalidEndpoint(String),
}

impl From<JudgeError> for JudgeResult {
    fn from(err: JudgeError) -> Self {
        match err {
            JudgeError::Status(_) => Self::failed(CONNECTION_ERROR_ADVICE.to_string()),
            JudgeError::Parse(ParseError::MissingScore { raw }) => Self::failed(format!(
                "AI 형식이 올바르지 않습니다. 내용: {raw}"
            )),
            JudgeError::Parse(ParseError::MalformedScore { digits, raw }) => Self::failed(
                format!("AI 점수를 읽을 수 없습니다 ({digits}). 내용: {raw}"),
            ),
            other => Self::failed(format!("Error: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgeConfig {
    pub base_url: Url,
}

impl JudgeConfig {
    /// Parse an endpoint. It must be able to take an extra path segment.
    pub fn with_base_url(raw: &str) -> Result<Self, JudgeError> {
        let base_url =
            Url::parse(raw).map_err(|_| JudgeError::InvalidEndpoint(raw.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(JudgeError::InvalidEndpoint(raw.to_string()));
        }
        Ok(Self { base_url })
    }

    /// Default endpoint, or `LIFERHYTHM_JUDGE_URL` when set and valid.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(raw) => Self::with_base_url(&raw).unwrap_or_else(|err| {
                warn!(%err, "ignoring {}; using default judge endpoint", BASE_URL_ENV);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default judge endpoint"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JudgeClient<T = HttpTransport> {
    config: JudgeConfig,
    transport: T,
}

impl JudgeClient<HttpTransport> {
    pub fn new(config: JudgeConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> JudgeClient<T> {
    pub fn with_transport(config: JudgeConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &JudgeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One attempt, with every failure kept distinct.
    pub async fn try_evaluate(&self, input: &RoutineInput) -> Result<JudgeResult, JudgeError> {
        let prompt = build_prompt(input);
        let url = request_url(&self.config.base_url, &prompt);
        debug!(prompt_len = prompt.len(), host = ?url.host_str(), "requesting judge verdict");

        let response = self.transport.get(&url).await?;
        if response.status != 200 {
            return Err(JudgeError::Status(response.status));
        }
        Ok(parse_response(&response.body)?)
    }

    /// One attempt; failures become score 0 with a diagnostic advice.
    pub async fn evaluate(&self, input: &RoutineInput) -> JudgeResult {
        match self.try_evaluate(input).await {
            Ok(result) => {
                info!(score = result.score, "judge verdict received");
                result
            }
            Err(err) => {
                warn!(error = %err, "judge evaluation failed");
                JudgeResult::from(err)
            }
        }
    }
}
