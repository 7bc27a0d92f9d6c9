use serde::{Deserialize, Serialize};

pub const SITEVERIFY_URL: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Body sent to `/siteverify`.
#[derive(Debug, Serialize)]
pub struct SiteverifyRequest<'a> {
    pub secret: &'a str,
    pub response: &'a str,
}

/// What `/siteverify` answers. Only the fields we relay are kept.
#[derive(Debug, Deserialize)]
pub struct TurnstileResponse {
    pub success: bool,
    #[serde(rename = "error-codes")]
    pub error_codes: Option<Vec<String>>,
    pub challenge_ts: Option<String>,
    pub hostname: Option<String>,
}

/// Relayed back to the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_codes: Option<Vec<String>>,
}

impl From<TurnstileResponse> for VerificationOutcome {
    fn from(resp: TurnstileResponse) -> Self {
        Self {
            success: resp.success,
            challenge_ts: resp.challenge_ts,
            hostname: resp.hostname,
            error_codes: resp.error_codes,
        }
    }
}
