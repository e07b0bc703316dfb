//! HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, router assembly, version mounts)
//!     → request.rs (add request ID)
//!     → versioned sub-router (question flow handlers)
//!     → middleware/redirect_rewrite.rs (prefix path-absolute redirects)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
