//! Middleware for logging requests and responses.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};

/// The longest body, in bytes, that is logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log each request and its response, including the JSON bodies.
///
/// Bodies longer than [LOG_BODY_LENGTH_LIMIT] bytes are truncated at the
/// `info` level and logged in full at the `debug` level. Buffering the whole
/// body is fine here: every payload this fixture sees is a small JSON
/// document.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = read_body(body).await;

    tracing::info!(
        method = %parts.method,
        uri = %parts.uri,
        body = display_body(&body_text),
        "received request"
    );
    if body_text.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("full request body: {body_text}");
    }

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    let body_text = read_body(body).await;

    tracing::info!(
        status = %parts.status,
        body = display_body(&body_text),
        "sending response"
    );
    if body_text.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!("full response body: {body_text}");
    }

    Response::from_parts(parts, body_text.into())
}

async fn read_body(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    String::from_utf8_lossy(&bytes).to_string()
}

fn display_body(body: &str) -> &str {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        &body[..LOG_BODY_LENGTH_LIMIT]
    } else {
        body
    }
}

#[cfg(test)]
mod display_body_tests {
    use super::{LOG_BODY_LENGTH_LIMIT, display_body};

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(display_body("{}"), "{}");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(display_body(&body).len(), LOG_BODY_LENGTH_LIMIT);
    }
}
