use crate::config::Config;
use crate::error::Error;
use crate::rate_limit::{extract_rate_limit, RateLimitInfo};
use crate::types::{ApiErrorBody, PaginationParameters};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    pub retriable: bool,
}

/// One API response: the decoded body or an error, plus the rate limit
/// state the server reported alongside it.
#[derive(Debug, Clone)]
pub struct RestResponse<T> {
    pub value: Option<T>,
    pub rate_limit_info: Option<RateLimitInfo>,
    pub error: Option<ErrorInfo>,
    pub status: StatusCode,
}

impl<T> RestResponse<T> {
    fn new(status: StatusCode, headers: Option<&HeaderMap>) -> Self {
        let mut resp = Self {
            value: None,
            rate_limit_info: None,
            error: None,
            status,
        };
        if let Some(h) = headers {
            resp.set_rate_limit_info(h);
        }
        resp
    }

    fn failed(status: StatusCode, headers: Option<&HeaderMap>, error: ErrorInfo) -> Self {
        let mut resp = Self::new(status, headers);
        resp.error = Some(error);
        resp
    }

    /// Replace the stored rate limit info with what `headers` carry.
    pub fn set_rate_limit_info(&mut self, headers: &HeaderMap) {
        self.rate_limit_info = extract_rate_limit(headers);
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.value.is_some()
    }
}

pub fn build_client(cfg: &Config) -> Result<Client, Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_str(&cfg.user_agent)?);
    // Authorization header is injected per request.
    let client = Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()?;
    Ok(client)
}

fn auth_header(token: &str) -> Result<HeaderValue, Error> {
    Ok(HeaderValue::from_str(&format!("Bearer {}", token))?)
}

/// Classify a non-2xx response.
///
/// When the body is esa's `{"error", "message"}` shape its code and message
/// are used as-is; otherwise the code is derived from the status and the raw
/// body becomes the message. Retriability always follows the status.
pub fn map_status_to_error(status: StatusCode, body: &str) -> ErrorInfo {
    let retriable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
    if let Ok(api) = serde_json::from_str::<ApiErrorBody>(body) {
        return ErrorInfo {
            code: api.error,
            message: api.message,
            retriable,
        };
    }
    let code = match status {
        StatusCode::BAD_REQUEST => "bad_request",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not_found",
        StatusCode::CONFLICT => "conflict",
        StatusCode::TOO_MANY_REQUESTS => "rate_limited",
        s if s.is_server_error() => "upstream_error",
        _ => "server_error",
    };
    ErrorInfo {
        code: code.to_string(),
        message: body.to_string(),
        retriable,
    }
}

/// Percent-encode a single path segment; unreserved characters pass through.
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// `/v1/teams/{team}/{rest}`, with the team encoded. An empty `rest` yields
/// the team resource itself.
pub fn team_path(team: &str, rest: &str) -> String {
    let base = format!("/v1/teams/{}", encode_path_segment(team));
    if rest.is_empty() || rest.starts_with('/') {
        format!("{}{}", base, rest)
    } else {
        format!("{}/{}", base, rest)
    }
}

// The token must only ever reach the configured origin, so the path has to be
// absolute and the joined URL must keep the base's scheme, host and port.
fn request_url(cfg: &Config, path: &str, params: &PaginationParameters) -> Result<url::Url, Error> {
    if !path.starts_with('/') {
        return Err(Error::InvalidPath(path.to_string()));
    }
    let base = url::Url::parse(&cfg.api_url)?;
    let mut url = url::Url::parse(&format!("{}{}", cfg.api_url, path))?;
    if url.scheme() != base.scheme()
        || url.host_str() != base.host_str()
        || url.port_or_known_default() != base.port_or_known_default()
        || !url.username().is_empty()
        || url.password().is_some()
    {
        return Err(Error::InvalidPath(path.to_string()));
    }
    let pairs = params.query_pairs();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url)
}

/// Issue a single GET and decode the JSON body into `T`.
///
/// Rate limit info is taken from every response that reaches us, including
/// error responses. The request is never retried.
pub async fn rest_get_json<T: for<'de> Deserialize<'de>>(
    client: &Client,
    cfg: &Config,
    path: &str,
    params: &PaginationParameters,
) -> RestResponse<T> {
    let prepared = request_url(cfg, path, params)
        .and_then(|url| auth_header(&cfg.token).map(|auth| (url, auth)));
    let (url, auth) = match prepared {
        Ok(p) => p,
        Err(e) => {
            return RestResponse::failed(
                StatusCode::BAD_REQUEST,
                None,
                ErrorInfo {
                    code: "bad_request".into(),
                    message: e.to_string(),
                    retriable: false,
                },
            );
        }
    };
    debug!("REST GET {}", url);

    let res = client
        .get(url.clone())
        .header(AUTHORIZATION, auth)
        .header(ACCEPT, HeaderValue::from_static("application/json"))
        .send()
        .await;

    let res = match res {
        Ok(r) => r,
        Err(e) => {
            warn!("REST GET error sending request: {}", e);
            return RestResponse::failed(
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
                ErrorInfo {
                    code: "upstream_error".into(),
                    message: e.to_string(),
                    retriable: true,
                },
            );
        }
    };

    let status = res.status();
    let headers = res.headers().clone();

    if status.is_success() {
        return match res.json::<T>().await {
            Ok(val) => {
                let mut resp = RestResponse::new(status, Some(&headers));
                resp.value = Some(val);
                resp
            }
            Err(e) => RestResponse::failed(
                status,
                Some(&headers),
                ErrorInfo {
                    code: "server_error".into(),
                    message: e.to_string(),
                    retriable: false,
                },
            ),
        };
    }

    let text = res.text().await.unwrap_or_default();
    warn!("REST GET {} failed with status {}", url, status);
    RestResponse::failed(status, Some(&headers), map_status_to_error(status, &text))
}
