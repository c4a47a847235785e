use super::{ensure_parent, error_context, generr, inerr, object_type, unkext, Error, ObjectType};

use serde::{de::DeserializeOwned, Serialize};

use std::path::Path;

#[derive(Debug, PartialEq)]
enum Ext {
    Toml,
}
fn get_ext(path: &Path) -> Option<Ext> {
    let ext = path.extension()?.to_str()?;
    match ext.to_ascii_lowercase().as_str() {
        "toml" => Some(Ext::Toml),
        _ => None,
    }
}

/// Load the data from a file, interpreting the content of the file based on the
/// extension (see [`Ext`] for the possible extensions) of the file and deserializing
/// the content to the generic type T
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let errctx = error_context(format!("could not load file at path {}", path.display()));
    if !path.exists() {
        return Err(generr(errctx("open file"), "file doesn't exist"));
    }
    if object_type(path) != Some(ObjectType::File) {
        return Err(generr(errctx("open file"), "object at path is not a file"));
    }

    match get_ext(path) {
        Some(Ext::Toml) => {
            let serialized = std::fs::read_to_string(path)
                .map_err(inerr(errctx("read content to string")))?;
            toml::from_str(&serialized).map_err(inerr(errctx("deserialize content from toml")))
        }
        None => Err(unkext(path)),
    }
}
/// Save a serializable data structure of generic type T to a file, encoding the
/// serialized data based on the extension of the file (see [`Ext`] for the possible
/// extensions)
pub fn save<T: Serialize>(path: &Path, content: &T) -> Result<(), Error> {
    let errctx = error_context(format!("could not save file at path {}", path.display()));
    match get_ext(path) {
        Some(Ext::Toml) => {
            let serialized =
                toml::to_string(content).map_err(inerr(errctx("serialize content to toml")))?;
            ensure_parent(path)?;
            std::fs::write(path, serialized).map_err(inerr(errctx("write content to file")))
        }
        None => Err(unkext(path)),
    }
}
