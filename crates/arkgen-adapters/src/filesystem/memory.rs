//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use arkgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ArkgenResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can hold a handle while
/// the engine owns a boxed copy.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed an existing file without going through the port (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let path = path.into();
        if let Some(parent) = path.parent() {
            add_dir_chain(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Seed an existing directory (testing helper).
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        add_dir_chain(&mut inner.directories, &path.into());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn add_dir_chain(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ArkgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path, "create directory"))?;
        add_dir_chain(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ArkgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path, "write file"))?;

        // Matches the strictness of a real filesystem
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let Ok(inner) = self.inner.read() else {
            return false;
        };
        inner.directories.contains(path)
    }
}

fn lock_error(path: &Path, operation: &str) -> arkgen_core::error::ArkgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: filesystem lock poisoned"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.is_dir(Path::new("a")));
        assert!(fs.is_dir(Path::new("a/b")));
        assert!(fs.is_dir(Path::new("a/b/c")));
    }

    #[test]
    fn write_requires_an_existing_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("x/y.ets"), "hi").is_err());

        fs.create_dir_all(Path::new("x")).unwrap();
        fs.write_file(Path::new("x/y.ets"), "hi").unwrap();
        assert_eq!(fs.read_file(Path::new("x/y.ets")).as_deref(), Some("hi"));
    }

    #[test]
    fn seeded_entries_are_visible_through_the_port() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("pages/Index.ets", "old");
        assert!(fs.exists(Path::new("pages/Index.ets")));
        assert!(fs.is_dir(Path::new("pages")));
    }
}
