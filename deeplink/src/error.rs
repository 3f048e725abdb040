// Copyright (c) 2024-2025 The OrbitX Developers

//! Protocol error type

use thiserror::Error;

/// Deep-link protocol errors
#[derive(Debug, Error)]
pub enum Error {
    /// Payload (de)serialization failed
    #[error("payload serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Compact parameter was not decodable base64
    #[error("compact parameter decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    /// No user identifier survived in the URL
    #[error("no user identifier recovered from url")]
    MissingUserId,
}
