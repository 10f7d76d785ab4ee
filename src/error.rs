//! Error types for the Pokedex catalog
//!
//! This module defines the error hierarchy for the whole crate.
//! Fetch failures have their own cloneable [`FetchError`] so they can be kept
//! in the catalog's load state; everything else surfaces as [`Error`].

use thiserror::Error;

/// Why a single page fetch failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connectivity problem, timeout, or the body could not be read
    #[error("Transport failure: {message}")]
    Transport { message: String },

    /// The listing endpoint answered with a non-2xx status
    #[error("HTTP {status}")]
    Http { status: u16 },

    /// The body did not match the expected envelope shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether a later attempt with the same parameters may succeed.
    ///
    /// Informational only: nothing in this crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Http { status } => is_retryable_status(*status),
            FetchError::Decode { .. } => false,
        }
    }
}

/// The main error type for the catalog
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    // ============================================================================
    // Catalog Errors
    // ============================================================================
    #[error("Page already assigned to entry '{name}' (page {page})")]
    PageAlreadyAssigned { name: String, page: u32 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The fetch failure behind this error, if any
    pub fn as_fetch(&self) -> Option<&FetchError> {
        match self {
            Error::Fetch(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        self.as_fetch().is_some_and(FetchError::is_retryable)
    }
}

/// Check if an HTTP status code is worth retrying
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the catalog
pub type Result<T> = std::result::Result<T, Error>;
