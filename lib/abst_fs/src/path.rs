use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    File,
    SymLink,
    Dir,
}

/// Type of the object at path, without following symlinks. `None` if nothing
/// exists at path (or if its metadata can't be read)
pub fn object_type<P: AsRef<Path>>(path: P) -> Option<ObjectType> {
    let metadata = std::fs::symlink_metadata(path).ok()?;
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        Some(ObjectType::SymLink)
    } else if file_type.is_dir() {
        Some(ObjectType::Dir)
    } else {
        Some(ObjectType::File)
    }
}
