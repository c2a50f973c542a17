use thiserror::Error;

use crate::models::wire::RawCreneau;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Scheduling conflict reported by the backend. The backend is the sole
    /// authority on double-booking; `conflicts` carries the offending slots
    /// verbatim and is never interpreted client-side.
    #[error("Scheduling conflict: {message}")]
    Conflict {
        message: String,
        conflicts: Vec<RawCreneau>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
