use anyhow::Context;

use crate::turnstile::{SiteverifyRequest, TurnstileResponse, SITEVERIFY_URL};

/// Something that can judge a Turnstile token.
#[allow(async_fn_in_trait)]
pub trait Verifier {
    async fn verify(&self, token: &str) -> anyhow::Result<TurnstileResponse>;
}

/// Calls the Turnstile `/siteverify` API with the worker's secret.
pub struct SiteverifyClient {
    secret: String,
    endpoint: String,
}

impl SiteverifyClient {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            endpoint: SITEVERIFY_URL.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// Not derived: the secret must never end up in logs.
impl std::fmt::Debug for SiteverifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteverifyClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Verifier for SiteverifyClient {
    async fn verify(&self, token: &str) -> anyhow::Result<TurnstileResponse> {
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .json(&SiteverifyRequest {
                secret: &self.secret,
                response: token,
            })
            .send()
            .await
            .context("failed to reach siteverify")?;
        let text = response
            .text()
            .await
            .context("failed to read siteverify response")?;
        serde_json::from_str::<TurnstileResponse>(&text)
            .with_context(|| format!("failed to parse siteverify response: {text}"))
    }
}
