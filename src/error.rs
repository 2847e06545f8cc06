//! Error taxonomy for workflow operations.
//!
//! Nothing here is fatal. Each variant is either a user-visible "try
//! again" condition or a mutation that applied to nothing. Mutations
//! report `NotFound` instead of silently skipping a missing id, so a
//! caller can tell "did nothing because nothing matched" apart from
//! "succeeded".

use thiserror::Error;

/// Errors surfaced by the session and the workflow managers.
#[derive(Debug, Error)]
pub enum Error {
    /// Login lookup miss. Deliberately silent on which part of the
    /// credentials was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A mutation referenced an id that is not in its collection.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Comment content was empty after trimming.
    #[error("comment content is empty")]
    EmptyComment,

    /// Logged-hour increments must be non-negative.
    #[error("cannot log negative hours")]
    NegativeHours,

    /// A second extension request while one is already pending.
    #[error("task {0} already has a pending extension request")]
    ExtensionPending(u64),

    /// An approve/reject decision with nothing awaiting one.
    #[error("task {0} has no pending extension request")]
    NoPendingExtension(u64),

    /// The command needs a capability the current role does not carry.
    #[error("{0} requires the Admin or CEO role")]
    Forbidden(&'static str),

    /// The command requires a logged-in identity.
    #[error("not logged in; run `wd login <email>` first")]
    NotLoggedIn,

    /// Due-date input that matched none of the accepted forms.
    #[error("unrecognised due date: {0}")]
    BadDate(String),

    /// Session slot could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Session slot held something that is not a serialized identity.
    #[error("session state: {0}")]
    Session(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
