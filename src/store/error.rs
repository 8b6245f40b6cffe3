//! Typed errors for the album store
//!
//! Query and write failures carry the operation name and the relevant
//! input so the top-level log line identifies what failed.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by [`AlbumStore`](super::AlbumStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Opening or pinging the database connection failed.
    #[error("database connection: {0}")]
    Connection(#[source] sqlx::Error),

    /// A read failed, a row would not decode, or a unique lookup matched
    /// more than one row.
    #[error("{op} {input:?}: {reason}")]
    Query {
        op: &'static str,
        input: String,
        reason: String,
    },

    /// A single-row lookup matched nothing.
    #[error("album {id}: not found")]
    NotFound { id: i64 },

    /// An insert or update was rejected by the database.
    #[error("{op}: {reason}")]
    Write { op: &'static str, reason: String },
}

impl StoreError {
    pub(crate) fn query(op: &'static str, input: impl ToString, reason: impl ToString) -> Self {
        Self::Query {
            op,
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn write(op: &'static str, reason: impl ToString) -> Self {
        Self::Write {
            op,
            reason: reason.to_string(),
        }
    }
}
