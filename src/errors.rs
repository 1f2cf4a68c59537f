use crate::engine::{CompileError, EngineError};
use crate::options::RegexConfigError;
use crate::replace::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegexError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("engine contract violated at offset {offset}: {detail}")]
    InvariantViolation { offset: usize, detail: &'static str },
    #[error(transparent)]
    Config(#[from] RegexConfigError),
    #[error("failed to buffer reader input: {0}")]
    Io(#[from] std::io::Error),
}

pub type RegexResult<T> = Result<T, RegexError>;
