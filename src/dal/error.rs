use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("couldn't determine the home directory")]
    HomeDirNotFound,

    #[error("couldn't determine the current directory")]
    CurrentDir(#[source] io::Error),

    #[error("error reading routes from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing routes in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("error serializing routes")]
    Serialize(#[from] serde_json::Error),

    #[error("error writing routes to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
