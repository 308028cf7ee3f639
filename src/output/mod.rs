//! Artifact persistence.
//!
//! Finalized artifacts are written as numbered files in a target
//! directory, one greater than the highest numeric name already present.
//! Id allocation sits behind a trait so the grouping engine's tests can
//! run against an in-memory sink, and the allocator itself can be swapped
//! out.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::transcript::ChatLine;

/// Receives finalized artifacts from the grouping engine.
pub trait ArtifactSink {
    fn write_artifact(&mut self, lines: &[ChatLine]) -> Result<()>;
}

/// Allocates persisted artifact ids.
pub trait SequenceAllocator {
    /// Next unused id for the target location.
    fn next(&mut self) -> Result<u64>;
}

/// Directory-scan allocator: one greater than the highest numeric entry
/// name; non-numeric names are ignored.
///
/// The id is derived from the directory's contents at call time, so
/// concurrent runs against the same directory are unsafe.
pub struct DirSequence {
    dir: PathBuf,
}

impl DirSequence {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SequenceAllocator for DirSequence {
    fn next(&mut self) -> Result<u64> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to list {}", self.dir.display()))?;
        let mut max = 0u64;
        for entry in entries {
            let entry = entry?;
            if let Some(num) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<u64>().ok())
            {
                max = max.max(num);
            }
        }
        Ok(max + 1)
    }
}

/// Writes artifacts as numbered files in a directory.
pub struct ArtifactStore {
    dir: PathBuf,
    seq: Box<dyn SequenceAllocator>,
}

impl ArtifactStore {
    /// Store rooted at `dir` with the directory-scan allocator. The
    /// directory is created when missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let seq = Box::new(DirSequence::new(&dir));
        Self::with_allocator(dir, seq)
    }

    /// Store with a caller-provided id allocator.
    pub fn with_allocator(dir: impl Into<PathBuf>, seq: Box<dyn SequenceAllocator>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
        Ok(Self { dir, seq })
    }

    /// Write one artifact (each line's message body, newline-terminated)
    /// and return the path it landed at.
    pub fn write(&mut self, lines: &[ChatLine]) -> Result<PathBuf> {
        let id = self.seq.next()?;
        let path = self.dir.join(id.to_string());
        let mut file = fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        for line in lines {
            file.write_all(line.message().unwrap_or_default().as_bytes())?;
            file.write_all(b"\n")?;
        }
        debug!(path = %path.display(), lines = lines.len(), "wrote artifact");
        Ok(path)
    }

    /// The directory artifacts land in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for ArtifactStore {
    fn write_artifact(&mut self, lines: &[ChatLine]) -> Result<()> {
        self.write(lines).map(|_| ())
    }
}
