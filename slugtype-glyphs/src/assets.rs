//! Asset store access.
//!
//! The glyph PNGs live in a read-only tree. Everything that touches that
//! tree goes through [`AssetSource`], so the locator and compositor can run
//! against the real filesystem or an in-memory store.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read-only view of a glyph asset store.
pub trait AssetSource {
    /// Whether `path` names an existing asset file.
    fn exists(&self, path: &Path) -> bool;

    /// Read the raw bytes of the asset at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

impl<S: AssetSource + ?Sized> AssetSource for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// Assets on the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsAssetSource;

impl AssetSource for FsAssetSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// In-memory asset store that counts every access.
///
/// Handy for benchmarks and for checking how often the compositor hits
/// the store.
#[derive(Debug, Default)]
pub struct MemoryAssetSource {
    files: HashMap<PathBuf, Vec<u8>>,
    reads: AtomicUsize,
    probes: AtomicUsize,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an asset.
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    /// Number of stored assets.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total `read` calls so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    /// Total `exists` calls so far.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }

    /// Reads + probes: zero means the store was never touched.
    pub fn access_count(&self) -> usize {
        self.read_count() + self.probe_count()
    }

    pub fn reset_counters(&self) {
        self.reads.store(0, Ordering::Relaxed);
        self.probes.store(0, Ordering::Relaxed);
    }
}

impl AssetSource for MemoryAssetSource {
    fn exists(&self, path: &Path) -> bool {
        self.probes.fetch_add(1, Ordering::Relaxed);
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no asset at {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_counts_accesses() {
        let mut source = MemoryAssetSource::new();
        source.insert("a.png", vec![1, 2, 3]);

        assert!(source.exists(Path::new("a.png")));
        assert!(!source.exists(Path::new("b.png")));
        assert_eq!(source.read(Path::new("a.png")).unwrap(), vec![1, 2, 3]);

        assert_eq!(source.probe_count(), 2);
        assert_eq!(source.read_count(), 1);
        assert_eq!(source.access_count(), 3);

        source.reset_counters();
        assert_eq!(source.access_count(), 0);
    }

    #[test]
    fn test_memory_source_missing_read_is_not_found() {
        let source = MemoryAssetSource::new();
        let err = source.read(Path::new("missing.png")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(source.is_empty());
    }

    #[test]
    fn test_fs_source_reads_real_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.png");
        fs::write(&path, b"bytes").unwrap();

        let source = FsAssetSource;
        assert!(source.exists(&path));
        assert!(!source.exists(dir.path()), "directories are not assets");
        assert_eq!(source.read(&path).unwrap(), b"bytes");
    }
}
