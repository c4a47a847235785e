use super::{error_context, generr, inerr, object_type, Error, ObjectType};

use std::path::Path;

/// Create a directory if it doesn't exist (creating subpaths recursively if needed)
pub fn create_dir(path: &Path) -> Result<(), Error> {
    let errctx = error_context(format!(
        "could not create directory at path {}",
        path.display()
    ));
    match object_type(path) {
        Some(ObjectType::Dir) => Ok(()),
        None => std::fs::create_dir_all(path).map_err(inerr(errctx("create directory"))),
        _ => Err(generr(
            errctx("create directory"),
            "objet already exists but is not a directory",
        )),
    }
}

/// Ensures that the parent directory of an object exists, creating all the subpath
/// if it doesn't
pub fn ensure_parent(path: &Path) -> Result<(), Error> {
    let errctx = error_context(format!(
        "could not ensure parent directory at path {}",
        path.display()
    ));
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            create_dir(parent).map_err(inerr(errctx("create parent")))
        }
        _ => Ok(()),
    }
}
