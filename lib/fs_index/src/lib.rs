mod error;
mod exclude;
mod index;
mod missing;
mod walk;
pub use error::ScanError;
pub use exclude::{ExcludeList, ExcludeListError};
pub use index::{
    build_index, index_entries, ContentSource, Disk, FileIndex, IndexOptions, Scan,
    ScanObserver, Silent, SizeAccounting,
};
pub use missing::{missing_files, MissingSet};
pub use walk::{walk, Entry};

#[cfg(test)]
mod test_utils;
