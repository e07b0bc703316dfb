//! Redirect rewriting for version-namespaced mounts.
//!
//! Handlers under a versioned mount issue redirects with path-absolute
//! targets (`/question-2`) and never know their own prefix. This middleware
//! reads the mount prefix from the request and rewrites the `Location`
//! header of redirect responses so the client stays inside the version the
//! request came in under.

use axum::body::Body;
use axum::extract::NestedPath;
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::request::RequestIdExt;

/// Marker recording that a response's `Location` was already rewritten.
/// An outer instance of the middleware skips marked responses, so double
/// installation never double-prefixes.
#[derive(Clone, Copy, Debug)]
struct RedirectRewritten;

/// Prefix path-absolute redirect targets with the current mount prefix.
///
/// Non-redirect responses and targets that do not start with `/` (absolute
/// URLs, empty string) pass through untouched. The prefix is empty when the
/// surrounding router is mounted at the root, making the rewrite a no-op.
pub async fn rewrite_redirects(req: Request<Body>, next: Next) -> Response {
    let prefix = req
        .extensions()
        .get::<NestedPath>()
        .map(|nested| nested.as_str().to_string())
        .unwrap_or_default();
    let request_id = req.request_id().map(str::to_string);

    let mut response = next.run(req).await;

    if !response.status().is_redirection() {
        return response;
    }
    if response.extensions().get::<RedirectRewritten>().is_some() {
        return response;
    }
    let Some(target) = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
    else {
        return response;
    };
    if !target.starts_with('/') {
        return response;
    }

    let rewritten = format!("{prefix}{target}");
    if let Ok(value) = HeaderValue::from_str(&rewritten) {
        tracing::debug!(
            request_id = request_id.as_deref().unwrap_or("unknown"),
            from = %target,
            to = %rewritten,
            "Rewrote redirect target"
        );
        response.headers_mut().insert(LOCATION, value);
        response.extensions_mut().insert(RedirectRewritten);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::response::Redirect;
    use axum::routing::{get, post};
    use axum::Router;
    use tower::ServiceExt;

    fn pages() -> Router {
        Router::new()
            .route("/question-1", post(|| async { Redirect::to("/question-2") }))
            .route("/away", post(|| async {
                Redirect::to("https://example.com/elsewhere")
            }))
            .route("/empty", post(|| async { Redirect::to("") }))
            .route("/plain", get(|| async { "ok" }))
            .layer(middleware::from_fn(rewrite_redirects))
    }

    async fn send(app: Router, method: &str, uri: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_path_absolute_target_gets_mount_prefix() {
        let app = Router::new().nest("/v1", pages());

        let response = send(app, "POST", "/v1/question-1").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/v1/question-2");
    }

    #[tokio::test]
    async fn test_absolute_url_target_unchanged() {
        let app = Router::new().nest("/v1", pages());

        let response = send(app, "POST", "/v1/away").await;

        assert_eq!(
            response.headers()[LOCATION],
            "https://example.com/elsewhere"
        );
    }

    #[tokio::test]
    async fn test_empty_target_unchanged() {
        let app = Router::new().nest("/v1", pages());

        let response = send(app, "POST", "/v1/empty").await;

        assert_eq!(response.headers()[LOCATION], "");
    }

    #[tokio::test]
    async fn test_non_redirect_response_untouched() {
        let app = Router::new().nest("/v1", pages());

        let response = send(app, "GET", "/v1/plain").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(LOCATION).is_none());
    }

    #[tokio::test]
    async fn test_double_installation_does_not_double_prefix() {
        let app = Router::new().nest(
            "/v1",
            pages().layer(middleware::from_fn(rewrite_redirects)),
        );

        let response = send(app, "POST", "/v1/question-1").await;

        assert_eq!(response.headers()[LOCATION], "/v1/question-2");
    }

    #[tokio::test]
    async fn test_root_mount_is_a_no_op() {
        // Merged at the root: no mount prefix, concatenation changes nothing.
        let app = Router::new().merge(pages());

        let response = send(app, "POST", "/question-1").await;

        assert_eq!(response.headers()[LOCATION], "/question-2");
    }

    #[tokio::test]
    async fn test_deep_nesting_accumulates_full_prefix() {
        let app = Router::new().nest("/proto", Router::new().nest("/v1", pages()));

        let response = send(app, "POST", "/proto/v1/question-1").await;

        assert_eq!(response.headers()[LOCATION], "/proto/v1/question-2");
    }
}
