use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading an input list or writing its outputs.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV encoding failed: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl ListError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn decode(path: &Path, source: std::string::FromUtf8Error) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(source: csv::Error) -> Self {
        Self::Csv { source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
