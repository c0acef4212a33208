use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("JSON Error")]
    JsonError(#[from] serde_json::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Record count must be positive")]
    EmptyCount,
}
