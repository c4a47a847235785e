use super::{generr, Error};

use std::path::PathBuf;

pub fn home_dir() -> Result<PathBuf, Error> {
    match dirs::home_dir() {
        Some(home_dir) => Ok(home_dir),
        None => Err(generr(
            "unable to retrieve home directory path",
            "failed to get home directory through crate `dirs`",
        )),
    }
}
