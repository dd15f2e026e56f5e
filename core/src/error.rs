//! Error types for the homefeed core
//!
//! `ProviderError` is the failure surface of every data-provider port.
//! Provider failures are never fatal to the screen: the controller catches
//! them and surfaces a recoverable per-slice error in the snapshot instead
//! of propagating.

use thiserror::Error;

/// Errors returned by the data-provider ports
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}
