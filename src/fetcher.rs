use crate::error::FetchError;
use futures::StreamExt;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

const USER_AGENT: &str = concat!("crrl/", env!("CARGO_PKG_VERSION"));
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Fixed-delay retry policy. `max_attempts` counts the first try.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// The error is final on its own; return it untouched.
    Stop,
    /// Out of attempts.
    GiveUp,
    RetryAfter(Duration),
}

impl RetryPolicy {
    /// `attempt` is 1-based.
    pub fn decide(&self, attempt: u32, err: &FetchError) -> RetryDecision {
        if err.is_rate_limited() {
            return RetryDecision::Stop;
        }
        if attempt >= self.max_attempts.max(1) {
            return RetryDecision::GiveUp;
        }
        RetryDecision::RetryAfter(self.delay)
    }
}

pub struct Fetcher {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(policy: RetryPolicy) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, policy })
    }

    /// GET with retries. Rate-limit responses fail at once; everything else
    /// is retried until the policy runs out of attempts.
    pub async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let mut attempt = 1u32;
        loop {
            let err = match self.attempt(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            match self.policy.decide(attempt, &err) {
                RetryDecision::Stop => return Err(err),
                RetryDecision::GiveUp => {
                    return Err(FetchError::Exhausted {
                        url: url.to_string(),
                        attempts: attempt,
                        source: Box::new(err),
                    })
                }
                RetryDecision::RetryAfter(delay) => {
                    warn!("Attempt {} for {} failed: {}; retrying in {:?}", attempt, url, err, delay);
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt(&self, url: &str) -> Result<Response, FetchError> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        debug!("{} -> {}", url, status);

        if status == StatusCode::FORBIDDEN {
            let remaining = resp
                .headers()
                .get(RATE_LIMIT_REMAINING)
                .and_then(|v| v.to_str().ok());
            if remaining == Some("0") {
                return Err(FetchError::RateLimited);
            }
        }

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(resp)
    }

    /// Fetches `url` and returns the body as text, reporting bytes on `pb`.
    pub async fn get_text(&self, url: &str, pb: &ProgressBar) -> Result<String, FetchError> {
        let resp = self.get(url).await?;
        let mut body = Vec::new();
        let mut stream = resp.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            body.extend_from_slice(&chunk);
            pb.set_message(format!("Fetching remote file... {} bytes", body.len()));
        }

        info!("Fetched {} bytes from {}", body.len(), url);
        // Invalid UTF-8 becomes U+FFFD, matching `Response::text`.
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let resp = self.get(url).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Json {
            url: url.to_string(),
            source,
        })
    }
}
