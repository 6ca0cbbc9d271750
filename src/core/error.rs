use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchemapError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
