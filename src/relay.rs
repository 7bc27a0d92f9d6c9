use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use worker::Method;

use crate::{
    cors::cors_headers,
    reply::RelayReply,
    services::siteverify::Verifier,
    turnstile::VerificationOutcome,
};

/// The parts of an inbound request the relay looks at.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub method: Method,
    pub origin: Option<String>,
    /// Raw body. Only read for POST.
    pub body: String,
}

#[derive(Debug, Serialize)]
struct MissingToken {
    success: bool,
    error: &'static str,
}

const MISSING_TOKEN: MissingToken = MissingToken {
    success: false,
    error: "missing token",
};

/// `token` must be a non-empty string; anything else counts as missing.
/// A `null` body and non-string tokens such as `42` get the 400 reply on
/// purpose, rather than failing the request or being forwarded upstream.
fn extract_token(body: &Value) -> Option<&str> {
    body.get("token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}

/// `verifier` is `None` when no secret is configured. Only a POST carrying a
/// token needs it; preflight and rejected methods are answered regardless.
pub async fn handle<V: Verifier>(
    req: &RelayRequest,
    verifier: Option<&V>,
) -> anyhow::Result<RelayReply> {
    let cors = cors_headers(req.origin.as_deref().unwrap_or(""));

    match req.method {
        Method::Options => Ok(RelayReply::empty(cors)),
        Method::Post => {
            let body = serde_json::from_str::<Value>(&req.body)
                .context("request body is not valid JSON")?;
            let Some(token) = extract_token(&body) else {
                return Ok(RelayReply::json(400, &MISSING_TOKEN, cors)?);
            };

            let verifier = verifier.context("TURNSTILE_SECRET is not configured")?;
            let upstream = verifier.verify(token).await?;
            let outcome = VerificationOutcome::from(upstream);
            Ok(RelayReply::json(200, &outcome, cors)?)
        }
        _ => Ok(RelayReply::text(405, "Method not allowed", cors)),
    }
}
