//! Request ID correlation.
//!
//! Every request gets an ID that shows up in the request span, in Sentry
//! tags and in the response headers, so a customer-reported failure can be
//! matched to its log lines. When Render's router (or any other proxy in
//! front of the API) already assigned one, that value wins.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that ensures every request has a unique request ID.
///
/// Reuses the incoming `x-request-id` header when present, otherwise
/// generates a UUID v4. The ID is recorded on the current tracing span,
/// tagged on the Sentry scope and echoed back in the response headers.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    // Echo the ID so the storefront can surface it in error toasts.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
