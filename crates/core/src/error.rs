use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("directory does not exist: {0}")]
    RootNotFound(PathBuf),
}
