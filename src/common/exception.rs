use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Table capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Usage: {0}")]
    Usage(String),
}
