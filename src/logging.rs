//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The maximum number of bytes of a request or response body logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// Only text and form bodies are read, anything else (e.g. images) is passed
/// through untouched and logged without its body. If a body is longer than
/// [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated and the full body is logged
/// at the `trace` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = if has_text_body(&parts.headers) {
        match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                log_request(&parts, Some(&bytes));
                Body::from(bytes)
            }
            Err(error) => {
                tracing::error!("Could not read request body: {error}");
                return StatusCode::BAD_REQUEST.into_response();
            }
        }
    } else {
        log_request(&parts, None);
        body
    };

    let request = Request::from_parts(parts, body);
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body = if has_text_body(&parts.headers) {
        match axum::body::to_bytes(body, usize::MAX).await {
            Ok(bytes) => {
                log_response(&parts, Some(&bytes));
                Body::from(bytes)
            }
            Err(error) => {
                tracing::error!("Could not read response body: {error}");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    } else {
        log_response(&parts, None);
        body
    };

    Response::from_parts(parts, body)
}

fn has_text_body(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .is_some_and(|content_type| {
            content_type.starts_with("text/")
                || content_type.starts_with("application/x-www-form-urlencoded")
        })
}

/// Cut `text` down to at most `limit` bytes without splitting a character.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_request(parts: &axum::http::request::Parts, body: Option<&Bytes>) {
    let Some(body) = body else {
        tracing::info!("Received request: {} {}", parts.method, parts.uri);
        return;
    };
    let body = String::from_utf8_lossy(body);

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate(&body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::trace!("Full request body: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &axum::http::response::Parts, body: Option<&Bytes>) {
    let Some(body) = body else {
        tracing::info!("Sending response: {}", parts.status);
        return;
    };
    let body = String::from_utf8_lossy(body);

    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {}\nbody: {}...",
            parts.status,
            truncate(&body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::trace!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}
