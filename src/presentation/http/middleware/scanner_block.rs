// src/presentation/http/middleware/scanner_block.rs
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use regex::RegexSet;

pub const DEFAULT_SCANNER_SIGNATURE: &str = "ZAP/2.7";
pub const SCANNER_BLOCKED_BODY: &str = "403 scanner not allowed to add data";

/// Compiled user-agent signatures of automated vulnerability scanners.
#[derive(Debug, Clone)]
pub struct ScannerGuard {
    signatures: RegexSet,
}

impl ScannerGuard {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            signatures: RegexSet::new(patterns)?,
        })
    }

    /// A guard that lets every client through.
    pub fn disabled() -> Self {
        Self {
            signatures: RegexSet::empty(),
        }
    }

    pub fn is_scanner(&self, user_agent: &str) -> bool {
        self.signatures.is_match(user_agent)
    }
}

impl Default for ScannerGuard {
    fn default() -> Self {
        Self::new([DEFAULT_SCANNER_SIGNATURE]).unwrap_or_else(|_| Self::disabled())
    }
}

/// Route middleware refusing known scanners before the new-article form is served.
///
/// Every `User-Agent` value is checked, decoded lossily so stray non-ASCII
/// bytes cannot hide a signature.
///
/// Usage: `get(handler).route_layer(axum::middleware::from_fn(block_scanners))`
pub async fn block_scanners(req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>() else {
        tracing::warn!("HttpState missing from request extensions, scanner block skipped");
        return next.run(req).await;
    };

    if let Some(user_agent) = scanner_user_agent(&state.scanner_guard, req.headers()) {
        tracing::info!(user_agent = %user_agent, "not allowing scanner to post");
        return (StatusCode::FORBIDDEN, SCANNER_BLOCKED_BODY).into_response();
    }

    next.run(req).await
}

/// First `User-Agent` value matching a scanner signature, if any.
fn scanner_user_agent(guard: &ScannerGuard, headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::USER_AGENT)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .find(|user_agent| guard.is_scanner(user_agent))
}
