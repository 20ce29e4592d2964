// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Portal error types.
//!
//! Every failure a user action can hit falls into one of these buckets.
//! None of them is retried and none is fatal to a dashboard.

use crate::session::StoreError;

/// Error raised by service calls and dashboard flows.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// A required form field was missing. Raised before any network call.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The session holds no bearer token.
    #[error("Authentication required")]
    Unauthorized,

    /// Transport failure or an undecodable response body.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-OK status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Session storage error: {0}")]
    Storage(#[from] StoreError),
}

impl PortalError {
    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            PortalError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the backend rejected the request's credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            PortalError::Unauthorized | PortalError::Api { status: 401, .. }
        )
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        PortalError::Network(err.to_string())
    }
}

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;
