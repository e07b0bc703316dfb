//! Request-scoped middleware.

pub mod redirect_rewrite;

pub use redirect_rewrite::rewrite_redirects;
