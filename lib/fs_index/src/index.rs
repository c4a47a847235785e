use super::{walk, Entry, ExcludeList, ScanError};

use hasher::Hash;
use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Content hash of every file met during a scan, each mapped to the path of the
/// last file with that content, plus the total size of the files met
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileIndex {
    files: HashMap<Hash, PathBuf>,
    total_bytes: u64,
}
impl FileIndex {
    pub fn empty() -> FileIndex {
        FileIndex::default()
    }
    pub fn len(&self) -> usize {
        self.files.len()
    }
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
    pub fn contains(&self, hash: &Hash) -> bool {
        self.files.contains_key(hash)
    }
    pub fn get(&self, hash: &Hash) -> Option<&Path> {
        self.files.get(hash).map(PathBuf::as_path)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Hash, &Path)> {
        self.files.iter().map(|(hash, path)| (hash, path.as_path()))
    }

    /// Record a file, replacing whatever file had the same content before
    pub(crate) fn insert(&mut self, hash: Hash, path: PathBuf) {
        self.files.insert(hash, path);
    }
    pub(crate) fn add_bytes(&mut self, size: u64) {
        self.total_bytes += size;
    }
}

/// Which files count towards [`FileIndex::total_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeAccounting {
    /// Every file whose metadata could be read, counted before trying to hash it
    #[default]
    Stat,
    /// Only the files that were hashed and made it into the index
    Hashed,
}

/// Where the content of a file comes from
pub trait ContentSource {
    type Reader: Read;
    fn open(&self, path: &Path) -> Result<Self::Reader, String>;
}

/// Content read from the file system
pub struct Disk;
impl ContentSource for Disk {
    type Reader = std::fs::File;
    fn open(&self, path: &Path) -> Result<Self::Reader, String> {
        abst_fs::read_file(path).map_err(|err| err.cause().to_string())
    }
}

/// Gets told about the progress of a scan while it happens
pub trait ScanObserver {
    fn directory(&mut self, _path: &Path) {}
    fn error(&mut self, _err: &ScanError) {}
}
pub struct Silent;
impl ScanObserver for Silent {}

#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    pub exclude_list: ExcludeList,
    pub accounting: SizeAccounting,
}

/// Result of scanning one or more roots into a single index
#[derive(Debug)]
pub struct Scan {
    pub index: FileIndex,
    pub errors: Vec<ScanError>,
    pub elapsed: Duration,
}
impl Scan {
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn add_file<S: ContentSource + ?Sized>(
    index: &mut FileIndex,
    path: PathBuf,
    size: u64,
    source: &S,
    accounting: SizeAccounting,
) -> Result<(), ScanError> {
    if accounting == SizeAccounting::Stat {
        index.add_bytes(size);
    }
    let reader = source.open(&path).map_err(|err| ScanError::Unreadable {
        path: path.clone(),
        err,
    })?;
    let hash = hasher::hash_stream(reader).map_err(|err| ScanError::Unreadable {
        path: path.clone(),
        err: err.to_string(),
    })?;
    if accounting == SizeAccounting::Hashed {
        index.add_bytes(size);
    }
    index.insert(hash, path);
    Ok(())
}

/// Fold a sequence of entries into an index. Directories are only reported to the
/// observer; every failure is reported, collected and skipped
pub fn index_entries<I, S, O>(
    entries: I,
    source: &S,
    accounting: SizeAccounting,
    observer: &mut O,
) -> (FileIndex, Vec<ScanError>)
where
    I: IntoIterator<Item = Result<Entry, ScanError>>,
    S: ContentSource + ?Sized,
    O: ScanObserver + ?Sized,
{
    entries.into_iter().fold(
        (FileIndex::empty(), Vec::new()),
        |(mut index, mut errors), entry| {
            let outcome = match entry {
                Ok(Entry::Dir { path }) => {
                    observer.directory(&path);
                    Ok(())
                }
                Ok(Entry::File { path, size }) => {
                    add_file(&mut index, path, size, source, accounting)
                }
                Err(err) => Err(err),
            };
            if let Err(err) = outcome {
                observer.error(&err);
                errors.push(err);
            }
            (index, errors)
        },
    )
}

/// Scan all the roots, in order, into a single index. A root that can't be read
/// is reported and the following ones are scanned anyway
pub fn build_index<P, O>(roots: &[P], options: &IndexOptions, observer: &mut O) -> Scan
where
    P: AsRef<Path>,
    O: ScanObserver + ?Sized,
{
    let start = Instant::now();
    let entries = roots
        .iter()
        .flat_map(|root| walk(root.as_ref(), &options.exclude_list));
    let (index, errors) = index_entries(entries, &Disk, options.accounting, observer);
    Scan {
        index,
        errors,
        elapsed: start.elapsed(),
    }
}
