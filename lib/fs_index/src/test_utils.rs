use std::path::{Path, PathBuf};

/// A scratch directory tree under the system temp dir, removed on drop so that a
/// failing assertion doesn't leave it behind for the next run
pub struct TestTree {
    root: PathBuf,
}
impl TestTree {
    pub fn new(name: &str, files: &[(&str, &str)]) -> TestTree {
        let root = std::env::temp_dir().join(format!("backcheck-test-fs_index-{name}"));
        if root.exists() {
            std::fs::remove_dir_all(&root).unwrap();
        }
        std::fs::create_dir_all(&root).unwrap();
        let tree = TestTree { root };
        for (rel_path, content) in files {
            tree.write(rel_path, content.as_bytes());
        }
        tree
    }
    pub fn path(&self) -> &Path {
        &self.root
    }
    pub fn write(&self, rel_path: &str, content: &[u8]) {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
}
impl Drop for TestTree {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
