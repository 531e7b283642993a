//! Shared mapping from pool and Diesel failures to port errors.

use tracing::debug;

use crate::domain::ports::PersistenceError;

use super::pool::PoolError;

/// Map pool errors to port-level persistence errors.
pub(crate) fn map_pool_error(error: PoolError) -> PersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to port-level persistence errors.
///
/// Adapter detail is logged here and collapsed into stable messages so the
/// boundary never leaks connection strings or SQL.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> PersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => PersistenceError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersistenceError::connection("database connection error")
        }
        _ => PersistenceError::query("database error"),
    }
}
