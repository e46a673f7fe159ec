use thiserror::Error;

/// Library-level errors.
///
/// The classification engine itself is total and never returns these; they
/// come from parsing wire ids, configuration and the experience memory store.
#[derive(Error, Debug)]
pub enum CareError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Experience memory lock poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
