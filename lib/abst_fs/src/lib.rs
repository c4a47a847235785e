mod error;
use error::{error_context, generr, inerr, unkext, wrgobj};
pub use error::Error;

mod path;
pub use path::{object_type, ObjectType};

mod directory;
pub use directory::{create_dir, ensure_parent};

mod file;
pub use file::{create_file, read_file};

mod saveload;
pub use saveload::{load, save};

mod env;
pub use env::home_dir;
