use thiserror::Error;

/// Custom error types for autocomp
#[derive(Debug, Error)]
pub enum AutocompError {
    #[error("Invalid list separator {0:?}: must be a non-NUL ASCII character")]
    InvalidSeparator(char),

    #[error("Invalid type separator {0:?}: must be a non-NUL ASCII character")]
    InvalidTypesep(char),

    #[error("List separator and type separator are both {0:?}")]
    SeparatorConflict(char),

    #[error("Invalid config file: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
