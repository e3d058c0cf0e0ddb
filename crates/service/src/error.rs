//! Service-level error types.

use thiserror::Error;

/// Errors produced by [`PetService`](crate::PetService).
///
/// Not-found is an ordinary outcome, not an error; the only failure is the
/// store itself.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Store(#[from] db::DbError),
}
