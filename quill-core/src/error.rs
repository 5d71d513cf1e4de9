use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build an identifier from an empty string")]
    EmptyIdentifier,

    #[error("replacement character {0:?} is not valid in an identifier")]
    InvalidReplacement(char),

    #[error("no value for placeholder '{name}'")]
    MissingValue { name: String },

    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
