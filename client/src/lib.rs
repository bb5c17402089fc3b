//! Typed client for the club attendance HTTP API.
//!
//! Every endpoint wraps its JSON body in the same envelope
//! (`{success, data?, message?, error?}`); this crate decodes that envelope
//! against explicit schemas and maps the outcome onto [`error::ClientError`].

pub mod api;
pub mod envelope;
pub mod error;
pub mod models;

pub use api::ApiClient;
pub use envelope::{ApiError, Envelope};
pub use error::ClientError;
