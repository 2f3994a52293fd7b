use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsNormError {
    // Roots
    #[error("no roots provided")]
    NoRoots,

    #[error("path not found")]
    NotFound(PathBuf),

    #[error("not a directory")]
    NotADirectory(PathBuf),

    // Walk
    #[error("IO error")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rename failed")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsNormError {
    /// The path this error occurred at, if applicable.
    /// Callers use this to present the failing location without pattern
    /// matching on variants.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(p) | Self::NotADirectory(p) | Self::Io { path: p, .. } => Some(p),
            Self::Rename { from, .. } => Some(from),
            Self::NoRoots => None,
        }
    }
}
