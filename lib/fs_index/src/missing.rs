use super::FileIndex;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Paths of the source files whose content appears nowhere in the destination,
/// ordered by path
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissingSet(Vec<PathBuf>);
impl MissingSet {
    pub fn len(&self) -> usize {
        let MissingSet(paths) = self;
        paths.len()
    }
    pub fn is_empty(&self) -> bool {
        let MissingSet(paths) = self;
        paths.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        let MissingSet(paths) = self;
        paths.iter().map(PathBuf::as_path)
    }

    /// Write one path per line, each terminated by a newline
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for path in self.iter() {
            writeln!(out, "{}", path.display())?;
        }
        out.flush()
    }
}

pub fn missing_files(source: &FileIndex, dest: &FileIndex) -> MissingSet {
    let mut missing = source
        .iter()
        .filter(|(hash, _)| !dest.contains(hash))
        .map(|(_, path)| path.to_path_buf())
        .collect::<Vec<PathBuf>>();
    missing.sort();
    MissingSet(missing)
}

#[cfg(test)]
mod tests {
    use super::{missing_files, MissingSet};
    use crate::FileIndex;
    use hasher::hash_bytes;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use std::path::{Path, PathBuf};

    fn index_of(files: &[(&str, &str)]) -> FileIndex {
        let mut index = FileIndex::empty();
        for (path, content) in files {
            index.insert(hash_bytes(content), PathBuf::from(path));
            index.add_bytes(content.len() as u64);
        }
        index
    }

    #[test]
    fn scenario() {
        let source = index_of(&[("a.txt", "hello"), ("b.txt", "world")]);
        let dest = index_of(&[("c.txt", "hello")]);

        let missing = missing_files(&source, &dest);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing.iter().collect::<Vec<_>>(), vec![Path::new("b.txt")]);

        let mut report = Vec::new();
        missing.write_to(&mut report).unwrap();
        assert_eq!(report, b"b.txt\n");
    }

    #[test]
    fn nothing_missing() {
        let source = index_of(&[("x/a.txt", "hello"), ("y/b.txt", "world")]);
        let dest = index_of(&[("renamed.txt", "world"), ("moved/a.txt", "hello")]);

        let missing = missing_files(&source, &dest);
        assert!(missing.is_empty());
        assert_eq!(missing, MissingSet::default());

        let mut report = Vec::new();
        missing.write_to(&mut report).unwrap();
        assert!(report.is_empty());

        assert!(missing_files(&FileIndex::empty(), &dest).is_empty());
    }

    #[test]
    fn sorted_report() {
        let source = index_of(&[
            ("src/zeta.txt", "z"),
            ("src/alpha.txt", "a"),
            ("src/mid/beta.txt", "b"),
        ]);

        let missing = missing_files(&source, &FileIndex::empty());
        let mut report = Vec::new();
        missing.write_to(&mut report).unwrap();
        assert_eq!(
            String::from_utf8(report).unwrap(),
            "src/alpha.txt\nsrc/mid/beta.txt\nsrc/zeta.txt\n"
        );
    }

    // A file is listed iff no destination file has the same content
    #[test]
    fn correctness() {
        let mut rng = SmallRng::seed_from_u64(0x5e7_d1ff);
        for _ in 0..50 {
            let contents = (0..30).map(|i| format!("content {i}")).collect::<Vec<_>>();
            let mut source = Vec::new();
            let mut dest = Vec::new();
            for (i, content) in contents.iter().enumerate() {
                if rng.gen_bool(0.7) {
                    source.push((format!("source/{i:02}.txt"), content.clone()));
                }
                if rng.gen_bool(0.5) {
                    dest.push((format!("dest/{}.bak", rng.gen::<u32>()), content.clone()));
                }
            }
            fn as_refs(files: &Vec<(String, String)>) -> Vec<(&str, &str)> {
                files
                    .iter()
                    .map(|(path, content)| (path.as_str(), content.as_str()))
                    .collect::<Vec<_>>()
            }
            let source_index = index_of(&as_refs(&source));
            let dest_index = index_of(&as_refs(&dest));

            let expected = source
                .iter()
                .filter(|(_, content)| !dest.iter().any(|(_, other)| other == content))
                .map(|(path, _)| PathBuf::from(path))
                .collect::<Vec<_>>();
            let missing = missing_files(&source_index, &dest_index);
            assert_eq!(
                missing.iter().map(Path::to_path_buf).collect::<Vec<_>>(),
                expected
            );
        }
    }
}
