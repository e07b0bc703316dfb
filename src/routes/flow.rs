//! Question page flow.
//!
//! Two pages that redirect to each other with path-absolute targets. The
//! same router is mounted under every configured version prefix, so the
//! handlers must not hardcode a version segment; the redirect rewriter
//! layered here keeps each redirect inside the mount it was issued under.

use axum::middleware;
use axum::response::Redirect;
use axum::routing::post;
use axum::Router;

use crate::http::middleware::rewrite_redirects;
use crate::http::server::AppState;

/// Build the page-flow router. Mounted once per version prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/question-1", post(question_1))
        .route("/question-2", post(question_2))
        .layer(middleware::from_fn(rewrite_redirects))
}

/// `POST /question-1`: advance to the second question.
async fn question_1() -> Redirect {
    Redirect::to("/question-2")
}

/// `POST /question-2`: loop back to the first question.
async fn question_2() -> Redirect {
    Redirect::to("/question-1")
}
