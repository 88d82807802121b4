//! Error types for the PetFriends client.
//!
//! # Design
//! A non-2xx status is not an error: it is returned inside the
//! [`Envelope`](crate::envelope::Envelope) for the caller to branch on. A body
//! that is not JSON is not an error either. What remains are failures that
//! prevent a response from existing at all, plus typed decoding on request.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by `PetFriends` operations and envelope decoding.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The photo to upload could not be read. No request was sent.
    #[error("cannot read photo {}: {source}", path.display())]
    Photo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `Envelope::decode` was asked for a type the body does not match.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}
