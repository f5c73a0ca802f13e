use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, warn};

use super::StorageError;
use crate::model::Route;

/// Reads the whole route list, preserving the order of the JSON array.
#[tracing::instrument]
pub fn load_routes(path: &Path) -> Result<Vec<Route>, StorageError> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let routes: Vec<Route> =
        serde_json::from_str(&content).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("loaded {} routes", routes.len());

    Ok(routes)
}

/// Overwrites `path` with the full route list.
///
/// The list is written to a sibling `.tmp` file first and then renamed over
/// the target, so the previous contents survive a failed write.
#[tracing::instrument(skip(routes), fields(count = routes.len()))]
pub fn save_routes(path: &Path, routes: &[Route]) -> Result<(), StorageError> {
    let json = to_json(routes)?;

    let tmp = tmp_path(path);

    let written = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path));
    if let Err(source) = written {
        remove_tmp(&tmp);
        return Err(StorageError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("saved routes to {}", path.display());

    Ok(())
}

/// Four space indentation. Non-ASCII text is written as is.
fn to_json(routes: &[Route]) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    routes.serialize(&mut serializer)?;

    Ok(buf)
}

fn remove_tmp(tmp: &Path) {
    match fs::remove_file(tmp) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => {
            warn!("couldn't remove {}: {e}", tmp.display());
        }
        _ => {}
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
