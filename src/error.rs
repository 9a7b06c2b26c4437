//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown option '{0}'")]
    InvalidOption(String),

    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOptionValue { option: String, value: String },

    #[error("Malformed input: not a valid Crockford Base32 string")]
    MalformedInput,

    #[error("Cannot encode a negative number")]
    NegativeNumber,
}

pub type Result<T> = std::result::Result<T, Error>;
