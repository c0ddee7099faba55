// src/error.rs

//! Error types for the Volunteer Link store.

use std::io;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors a store operation can report.
///
/// Capacity and duplicate-application rejections are deliberately not in
/// here: [`crate::Store::apply_to_project`] reports them through its boolean
/// result, since callers only need a yes/no outcome to pick a message.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Signup with an email that is already registered.
    #[error("email already registered: {email}")]
    DuplicateEmail {
        /// The email that collided.
        email: String,
    },

    /// Login with an email no user record matches.
    #[error("no user with that email")]
    NotFound,

    /// Catalog mutation attempted without an admin session.
    #[error("admin role required")]
    Unauthorized,

    /// I/O error from the storage directory.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
