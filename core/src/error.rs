//! Error types for the campaigns API client.
//!
//! # Design
//! `BadRequest` gets a dedicated variant because the form shows the server's
//! message verbatim for a 400, while every other failure gets a generic
//! notice. `NotFound` separates "the campaign is gone" from "the server
//! misbehaved". All other non-2xx responses land in `HttpError` with the raw
//! status and body.

use thiserror::Error;

/// Message used when a 400 response carries no readable `message` field.
pub const DEFAULT_BAD_REQUEST_MESSAGE: &str = "An error occurred";

/// Errors returned by `CampaignClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request with 400 and this message.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// The server returned 404: the campaign does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status the operation does not expect.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, timeout...).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// A draft that cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All schedule fields must be filled out.")]
    IncompleteSchedule { index: usize },
}
