use super::error::{cause_of, traverr};
use super::{ExcludeList, ScanError};

use walkdir::{DirEntry, WalkDir};

use std::path::{Path, PathBuf};

/// An object met while walking a tree
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Dir { path: PathBuf },
    /// Anything that is not a directory. `size` is the one reported by the
    /// metadata of the entry itself (symlinks are not followed)
    File { path: PathBuf, size: u64 },
}

/// Lazily walk the tree at `root`, depth first. The entries of a directory come in
/// file name order, so that two walks of the same tree give the same sequence.
/// The root itself is the first entry. Excluded directories are not descended into
pub fn walk<'a>(
    root: &Path,
    exclude_list: &'a ExcludeList,
) -> impl Iterator<Item = Result<Entry, ScanError>> + 'a {
    let prefix = root.to_path_buf();
    let root = root.to_path_buf();
    WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !is_excluded(&prefix, entry, exclude_list))
        .map(move |entry| -> Result<Entry, ScanError> {
            let entry = entry.map_err(|err| traverr(&root, err))?;
            to_entry(entry)
        })
}

fn is_excluded(root: &Path, entry: &DirEntry, exclude_list: &ExcludeList) -> bool {
    if entry.depth() == 0 || exclude_list.is_empty() {
        return false;
    }
    match entry.path().strip_prefix(root) {
        Ok(rel_path) => exclude_list.should_exclude(rel_path, entry.file_type().is_dir()),
        Err(_) => false,
    }
}

fn to_entry(entry: DirEntry) -> Result<Entry, ScanError> {
    if entry.file_type().is_dir() {
        return Ok(Entry::Dir {
            path: entry.into_path(),
        });
    }
    let metadata = entry.metadata().map_err(|err| ScanError::Metadata {
        path: entry.path().to_path_buf(),
        err: cause_of(&err),
    })?;
    Ok(Entry::File {
        path: entry.into_path(),
        size: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::{walk, Entry};
    use crate::test_utils::TestTree;
    use crate::{ExcludeList, ScanError};

    #[test]
    fn order() {
        let tree = TestTree::new(
            "walk-order",
            &[
                ("b.txt", "b"),
                ("a/z.txt", "z"),
                ("a/y/x.txt", "x"),
                ("c/empty.txt", ""),
            ],
        );
        let root = tree.path().to_path_buf();

        let entries = walk(&root, &ExcludeList::empty())
            .collect::<Result<Vec<Entry>, ScanError>>()
            .unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::Dir { path: root.clone() },
                Entry::Dir {
                    path: root.join("a")
                },
                Entry::Dir {
                    path: root.join("a").join("y")
                },
                Entry::File {
                    path: root.join("a").join("y").join("x.txt"),
                    size: 1
                },
                Entry::File {
                    path: root.join("a").join("z.txt"),
                    size: 1
                },
                Entry::File {
                    path: root.join("b.txt"),
                    size: 1
                },
                Entry::Dir {
                    path: root.join("c")
                },
                Entry::File {
                    path: root.join("c").join("empty.txt"),
                    size: 0
                },
            ]
        );
    }

    #[test]
    fn exclude() {
        let tree = TestTree::new(
            "walk-exclude",
            &[
                ("keep.txt", "keep"),
                ("skip/inner.txt", "inner"),
                ("notes.tmp", "temporary"),
                ("sub/skip.txt", "not a directory"),
            ],
        );
        let root = tree.path().to_path_buf();
        let exclude_list =
            ExcludeList::from(&[String::from("^skip/"), String::from("\\.tmp$")]).unwrap();

        let paths = walk(&root, &exclude_list)
            .map(|entry| match entry.unwrap() {
                Entry::Dir { path } | Entry::File { path, .. } => path,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            paths,
            vec![
                root.clone(),
                root.join("keep.txt"),
                root.join("sub"),
                root.join("sub").join("skip.txt"),
            ]
        );
    }

    #[test]
    fn missing_root() {
        let root = std::env::temp_dir().join("backcheck-test-fs_index-walk-missing-root");
        assert!(!root.exists());

        let entries = walk(&root, &ExcludeList::empty()).collect::<Vec<_>>();
        assert_eq!(entries.len(), 1);
        match &entries[0] {
            Err(ScanError::RootUnreadable { path, .. }) => assert_eq!(path, &root),
            other => panic!("expected the root to be reported unreadable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let tree = TestTree::new("walk-symlink", &[("dir/file.txt", "content")]);
        let root = tree.path().to_path_buf();
        std::os::unix::fs::symlink(root.join("dir"), root.join("link")).unwrap();

        let entries = walk(&root, &ExcludeList::empty())
            .collect::<Result<Vec<Entry>, ScanError>>()
            .unwrap();
        // the link shows up as a non directory entry, its target is not walked twice
        assert_eq!(entries.len(), 4);
        assert!(matches!(
            entries.last(),
            Some(Entry::File { path, .. }) if path == &root.join("link")
        ));
    }
}
