use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("failed to compile pattern '{pattern}': {diagnostic}")]
    InvalidPattern { pattern: String, diagnostic: String },
    #[error("pattern '{pattern}' exceeds the engine size limit of {limit} bytes")]
    TooLarge { pattern: String, limit: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("search offset {offset} is outside the buffer of length {length}")]
    OffsetOutOfRange { offset: usize, length: usize },
    #[error("search length {length} exceeds the buffer of {capacity} bytes")]
    LengthOutOfRange { length: usize, capacity: usize },
    #[error("pattern '{pattern}' has been released")]
    Released { pattern: String },
    #[error("engine fault {code}: {message}")]
    Fault { code: i32, message: String },
}
