use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not match the combined log format")]
    Malformed,

    #[error("invalid timestamp '{value}'")]
    Timestamp { value: String },

    #[error("invalid {field} '{value}'")]
    Numeric { field: &'static str, value: String },
}
