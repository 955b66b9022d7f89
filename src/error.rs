use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("The \"Current\" settings profile is missing")]
    MissingCurrentSettings,

    #[error("The \"Default\" settings profile is missing")]
    MissingDefaultSettings,

    #[error("Settings profile not found: {0}")]
    ProfileNotFound(String),
}

impl AppError {
    /// Errors that leave the application unable to run correctly.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            AppError::MissingCurrentSettings
                | AppError::MissingDefaultSettings
                | AppError::ProfileNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
