//! Sending requests and classifying responses.
//!
//! Every call goes out exactly once. A response is accepted only when its
//! status matches what the endpoint returns on success (and, for result
//! downloads, when it is an octet-stream); anything else is turned into a
//! single [`Error::Remote`] by [`error_from_body`].

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::ApiMessage;
use crate::sanitize::{redact_url, truncate_for_log};
use crate::{Error, Result};

const OCTET_STREAM: &str = "application/octet-stream";

/// Send a prepared request.
pub(crate) async fn send(request: RequestBuilder, method: &str, url: &Url) -> Result<Response> {
    log::debug!("{method} {}", redact_url(url));

    let response = request.send().await.map_err(|e| {
        log::warn!("{method} {} failed: {e}", redact_url(url));
        Error::Transport(e)
    })?;

    log::debug!("Response Status: {}", response.status());
    Ok(response)
}

/// Decode a JSON body if the status is `success`, otherwise normalize the error.
pub(crate) async fn decode_json<T>(response: Response, success: StatusCode) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;
    log::debug!("Response Body: {}", truncate_for_log(&body));

    if status != success {
        log::warn!("unexpected status {status}, expected {success}");
        return Err(error_from_body(status.as_u16(), &body));
    }

    serde_json::from_str(&body).map_err(|e| {
        log::error!("JSON decode failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(&body));
        Error::Decode(e)
    })
}

/// Raw bytes of a result download.
///
/// The API answers some failures with HTTP 200 and a JSON body, so the
/// content type decides, not only the status.
pub(crate) async fn read_octet_stream(response: Response) -> Result<Vec<u8>> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if status == StatusCode::OK && is_octet_stream(&content_type) {
        let bytes = response.bytes().await?;
        log::debug!("downloaded {} bytes", bytes.len());
        return Ok(bytes.to_vec());
    }

    let body = response.text().await?;
    log::warn!(
        "expected {OCTET_STREAM}, got HTTP {status} with {content_type:?}: {}",
        truncate_for_log(&body)
    );
    Err(error_from_body(status.as_u16(), &body))
}

/// Media type check, ignoring case and parameters.
fn is_octet_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(OCTET_STREAM))
}

/// Turn an error payload into [`Error::Remote`].
///
/// Error bodies use inconsistent keys (`error`, `message`, `Message`,
/// `error_message`, ...), so every non-null value of a JSON object is kept
/// and joined with `", "`. A body that is not a JSON object is used as is.
pub(crate) fn error_from_body(status: u16, body: &str) -> Error {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => {
            let values: Vec<String> = map
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(_, value)| ApiMessage::from(value).to_string())
                .collect();
            if values.is_empty() {
                body.trim().to_string()
            } else {
                values.join(", ")
            }
        }
        _ => body.trim().to_string(),
    };

    let message = if message.is_empty() {
        format!("empty response body (HTTP {status})")
    } else {
        message
    };

    Error::Remote { status, message }
}
