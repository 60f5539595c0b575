//! Error types for the goal tracker service

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Opening the pool or the startup ping failed
    #[error("Database connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Reading the goals relation failed
    #[error("Database query error: {0}")]
    Query(#[source] sqlx::Error),

    /// Inserting or deleting a goal failed
    #[error("Database write error: {0}")]
    Write(#[source] sqlx::Error),

    /// Goal id from a form could not be used as a key
    #[error("Invalid goal id: {0:?}")]
    InvalidGoalId(String),

    /// In-memory id sequence ran past `i32::MAX`
    #[error("Goal id sequence exhausted")]
    SequenceExhausted,

    /// Loading or rendering an HTML template failed
    #[error("Template error: {0}")]
    Template(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl From<handlebars::TemplateError> for AppError {
    fn from(error: handlebars::TemplateError) -> Self {
        Self::Template(error.to_string())
    }
}

impl From<handlebars::RenderError> for AppError {
    fn from(error: handlebars::RenderError) -> Self {
        Self::Template(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = AppError::Config("DB_PORT is not a number".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: DB_PORT is not a number"
        );
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = AppError::Write(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database write error"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_goal_id() {
        let err = AppError::InvalidGoalId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid goal id: \"abc\"");
    }

    #[test]
    fn test_template_error_conversion() {
        let mut registry = handlebars::Handlebars::new();
        let err: AppError = registry
            .register_template_string("broken", "{{#each goals}}")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Template(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_addr_parse_error_conversion() {
        let parse_result = "invalid".parse::<std::net::SocketAddr>();
        assert!(parse_result.is_err());
        let app_err: AppError = parse_result.unwrap_err().into();
        assert!(matches!(app_err, AppError::AddrParse(_)));
    }
}
