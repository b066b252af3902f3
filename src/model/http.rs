/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::JSON_CONTENT_TYPE;
use crate::error::AppError;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Caller-supplied request options
///
/// The counterpart of a `fetch` init object: extra headers, query pairs and
/// an optional JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers; a later entry with the same name replaces an earlier one
    pub headers: Vec<(String, String)>,
    /// Query string pairs, URL-encoded on send
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl RequestOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query pair
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets the JSON body from any serializable value
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Joins an endpoint path onto the API base URL
///
/// Absolute `http(s)://` URLs are returned untouched.
pub fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Builds the outgoing header map
///
/// Caller headers go in first, then `overrides`, so an override always wins
/// regardless of the caller's casing of the header name.
pub fn merge_headers(
    caller: &[(String, String)],
    overrides: &[(HeaderName, String)],
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    for (name, value) in caller {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("invalid header name {name:?}: {e}")))?;
        headers.insert(name, header_value(value)?);
    }
    for (name, value) in overrides {
        headers.insert(name.clone(), header_value(value)?);
    }
    Ok(headers)
}

fn header_value(value: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(value)
        .map_err(|e| AppError::InvalidInput(format!("invalid header value: {e}")))
}

/// Sends a request and returns the raw response
///
/// No status interpretation happens here: a 401 or 500 comes back as a
/// normal [`Response`]. Only transport failures become errors.
///
/// # Arguments
/// * `client` - HTTP client (carries the configured timeout)
/// * `method` - HTTP method
/// * `url` - Absolute URL
/// * `headers` - Final header map, see [`merge_headers`]
/// * `options` - Query pairs and body
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: HeaderMap,
    options: &RequestOptions,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url).headers(headers);
    if !options.query.is_empty() {
        request = request.query(&options.query);
    }
    if let Some(body) = &options.body {
        request = request.body(serde_json::to_vec(body)?);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Sends an unauthenticated JSON request
///
/// Adds `Content-Type` and `Accept: application/json` on top of the caller's
/// headers.
pub async fn make_json_request(
    client: &Client,
    method: Method,
    url: &str,
    options: &RequestOptions,
) -> Result<Response, AppError> {
    let headers = merge_headers(
        &options.headers,
        &[
            (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
            (ACCEPT, JSON_CONTENT_TYPE.to_string()),
        ],
    )?;
    make_http_request(client, method, url, headers, options).await
}

/// Reads a response body as JSON
///
/// An empty body reads as `Value::Null`. A body that is not JSON is an
/// [`AppError::InvalidResponse`] on success statuses; on error statuses the
/// raw text is kept as a string so it can still describe the rejection.
pub async fn read_json(response: Response) -> Result<(StatusCode, Value), AppError> {
    let status = response.status();
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok((status, Value::Null));
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => Ok((status, value)),
        Err(_) if !status.is_success() => Ok((status, Value::String(text))),
        Err(e) => Err(AppError::InvalidResponse(format!(
            "expected JSON body (status {}): {e}",
            status.as_u16()
        ))),
    }
}

/// Human-readable reason for a rejected request
///
/// Uses the backend's `message` (or `error`) field when present, the raw
/// text body otherwise, and falls back to the status code.
pub fn rejection_message(status: StatusCode, body: &Value) -> String {
    let from_field = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    from_field("message")
        .or_else(|| from_field("error"))
        .or_else(|| {
            body.as_str()
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| format!("request rejected with status {}", status.as_u16()))
}

/// Returns the body of a 2xx response, or a rejection for anything else
pub fn expect_success(status: StatusCode, body: Value) -> Result<Value, AppError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(AppError::BackendRejected(rejection_message(status, &body)))
    }
}
