//! Shared fixtures for journal-term tests.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

/// A throwaway journal directory that is removed when dropped.
pub struct TempJournal {
    dir: TempDir,
}

impl TempJournal {
    pub fn new() -> TempJournal {
        return TempJournal {
            dir: tempfile::tempdir().expect("failed to create temp journal dir"),
        };
    }

    /// Creates a journal directory pre-filled with `(file name, content)` pairs.
    pub fn with_files(files: &[(&str, &str)]) -> TempJournal {
        let journal = TempJournal::new();
        for (name, content) in files {
            journal.write(name, content);
        }

        return journal;
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write journal file");
        return path;
    }

    pub fn write_bytes(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("failed to write journal file");
        return path;
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::create_dir_all(&path).expect("failed to create journal subdirectory");
        return path;
    }

    pub fn path(&self) -> &Path {
        return self.dir.path();
    }
}

impl Default for TempJournal {
    fn default() -> Self {
        return TempJournal::new();
    }
}
