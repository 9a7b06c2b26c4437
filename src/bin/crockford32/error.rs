use thiserror::Error;

/// CLI error, printed with an `ERROR:` prefix.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Message(String),

    #[error("no input provided; pass values as arguments or on stdin")]
    NoInput,

    #[error("not an integer: {0}")]
    InvalidNumber(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("{invalid} of {total} inputs are invalid")]
    InvalidInputs {
        /// Inputs that failed validation.
        invalid: usize,
        /// All inputs checked.
        total: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Crockford(#[from] crockford32::Error),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
