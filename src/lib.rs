//! Prototyping tool HTTP server with version-namespaced routing.
//!
//! The same page-flow handlers are mounted under every configured version
//! prefix (`/v1`, `/v2`, ...). A request-scoped middleware rewrites
//! path-absolute redirect targets so a redirect issued under one version
//! stays inside that version; handlers never know their own prefix.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod routes;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
