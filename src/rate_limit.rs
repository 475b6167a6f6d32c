use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Unix epoch seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// `None` when the value is outside chrono's representable range.
    pub fn to_datetime(self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::<chrono::Utc>::from_timestamp(self.0, 0)
    }
}

/// Rate limit state reported by the API for one response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub limit: u64,
    pub remaining: u64,
    pub reset: Option<Timestamp>,
}

#[derive(Debug, thiserror::Error)]
#[error("malformed {name} header: {value:?}")]
struct MalformedHeader {
    name: &'static str,
    value: String,
}

// Ok(None) for an absent or empty header.
fn header_value<T: FromStr>(
    headers: &HeaderMap,
    name: &'static str,
) -> Result<Option<T>, MalformedHeader> {
    let Some(raw) = headers.get(name) else {
        return Ok(None);
    };
    let s = raw.to_str().map_err(|_| MalformedHeader {
        name,
        value: String::from_utf8_lossy(raw.as_bytes()).into_owned(),
    })?;
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<T>().map(Some).map_err(|_| MalformedHeader {
        name,
        value: s.to_string(),
    })
}

fn try_extract(headers: &HeaderMap) -> Result<RateLimitInfo, MalformedHeader> {
    let limit = header_value::<u64>(headers, RATE_LIMIT_LIMIT)?.unwrap_or(0);
    let remaining = header_value::<u64>(headers, RATE_LIMIT_REMAINING)?.unwrap_or(0);
    let reset = header_value::<i64>(headers, RATE_LIMIT_RESET)?.map(Timestamp);
    Ok(RateLimitInfo {
        limit,
        remaining,
        reset,
    })
}

/// Read the `X-RateLimit-*` headers.
///
/// Missing or empty headers default to zero (`reset` to `None`). A single
/// malformed value discards the whole result, so `None` means "unknown".
pub fn extract_rate_limit(headers: &HeaderMap) -> Option<RateLimitInfo> {
    try_extract(headers).ok()
}
