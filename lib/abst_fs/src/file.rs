use super::{ensure_parent, error_context, inerr, object_type, wrgobj, Error, ObjectType};

use std::path::Path;

/// Create a file (creating subpaths recursively if needed) and open it in write-only
/// mode. An existing file is truncated
pub fn create_file(path: &Path) -> Result<std::fs::File, Error> {
    let errctx = error_context(format!("could not create file at path {}", path.display()));
    ensure_parent(path).map_err(inerr(errctx("ensure parent directory")))?;
    std::fs::File::create(path).map_err(inerr(errctx("create file")))
}

/// Attempts to open a file in read-only mode. Symlinks are followed, so a link to a
/// file opens its target
pub fn read_file(path: &Path) -> Result<std::fs::File, Error> {
    let errmsg = format!("could not open file at path {}", path.display());
    let errctx = error_context(errmsg.clone());
    match object_type(path) {
        Some(ObjectType::File) | Some(ObjectType::SymLink) => { /* ... */ }
        None => {
            return Err(wrgobj(
                errmsg + "\nFile doesn't exist",
                "object doesn't exist",
            ));
        }
        Some(ObjectType::Dir) => {
            return Err(wrgobj(
                errmsg + "\nPath is not a file",
                "object is not a file",
            ));
        }
    }
    std::fs::File::open(path).map_err(inerr(errctx("open file")))
}
