use std::fmt;

use async_trait::async_trait;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::Entry;
use super::StoreError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum StoreName {
    /// Date-named markdown files in a journal directory.
    #[default]
    Files,
    /// A fixed set of in-memory notes.
    Notes,
}

impl StoreName {
    pub fn parse(s: &str) -> Option<StoreName> {
        return StoreName::iter().find(|e| return e.to_string() == s);
    }
}

/// A file that was left out of the collection during `load`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_name: String,
    pub reason: String,
}

impl LoadWarning {
    pub fn new(file_name: &str, err: &StoreError) -> LoadWarning {
        return LoadWarning {
            file_name: file_name.to_string(),
            reason: err.to_string(),
        };
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "skipped {}: {}", self.file_name, self.reason);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub warnings: Vec<LoadWarning>,
}

/// Backing storage for the entries shown by the panels.
///
/// Entries are loaded once at startup. Afterwards the only mutation is
/// `commit`, which overwrites the in-memory content and never writes back.
#[async_trait]
pub trait EntryStore: Send + Sync {
    fn name(&self) -> StoreName;
    async fn load(&mut self) -> Result<LoadReport, StoreError>;
    fn list(&self) -> &[Entry];
    fn get(&self, name: &str) -> Option<&Entry>;
    fn commit(&mut self, name: &str, content: &str) -> Result<(), StoreError>;
}

pub type EntryStoreBox = Box<dyn EntryStore>;
