use thiserror::Error;

use std::path::{Path, PathBuf};

/// A failure on a single item of a scan. None of these stop the scan: the item
/// simply contributes nothing to the index
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("could not scan root directory '{}': {err}", .path.display())]
    RootUnreadable { path: PathBuf, err: String },

    #[error("could not list directory '{}': {err}", .path.display())]
    DirUnreadable { path: PathBuf, err: String },

    #[error("could not get file info '{}': {err}", .path.display())]
    Metadata { path: PathBuf, err: String },

    #[error("could not read file '{}': {err}", .path.display())]
    Unreadable { path: PathBuf, err: String },
}
impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::RootUnreadable { path, .. }
            | ScanError::DirUnreadable { path, .. }
            | ScanError::Metadata { path, .. }
            | ScanError::Unreadable { path, .. } => path,
        }
    }
}

/// Turn an error of the traversal into a [`ScanError`], telling apart failures on
/// the root itself from failures deeper in the tree
pub(crate) fn traverr(root: &Path, err: walkdir::Error) -> ScanError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let cause = cause_of(&err);
    if err.depth() == 0 {
        ScanError::RootUnreadable { path, err: cause }
    } else {
        ScanError::DirUnreadable { path, err: cause }
    }
}

pub(crate) fn cause_of(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io_err) => io_err.to_string(),
        None => err.to_string(),
    }
}
