//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses as a socket address
//! - Check version prefixes are well-formed and unique
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}': expected host:port")]
    InvalidBindAddress(String),

    #[error("version prefix must not be empty")]
    EmptyVersion,

    #[error("version prefix '{0}' must not contain '/'")]
    VersionContainsSlash(String),

    #[error("duplicate version prefix '{0}'")]
    DuplicateVersion(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let mut seen = HashSet::new();
    for version in &config.routing.versions {
        if version.is_empty() {
            errors.push(ValidationError::EmptyVersion);
            continue;
        }
        if version.contains('/') {
            errors.push(ValidationError::VersionContainsSlash(version.clone()));
        }
        if !seen.insert(version.as_str()) {
            errors.push(ValidationError::DuplicateVersion(version.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
