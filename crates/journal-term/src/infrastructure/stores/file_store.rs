#[cfg(test)]
#[path = "file_store_test.rs"]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::fs;

use crate::domain::models::Entry;
use crate::domain::models::EntryCollection;
use crate::domain::models::EntryStore;
use crate::domain::models::LoadReport;
use crate::domain::models::LoadWarning;
use crate::domain::models::StoreError;
use crate::domain::models::StoreName;

pub const JOURNAL_SUFFIX: &str = ".md";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TITLE_FORMAT: &str = "%a, %d %b %Y";

/// Zero-padded `YYYY-MM-DD` only. chrono alone accepts short fields and a
/// leading sign.
fn is_date_shaped(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    return bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| {
            return match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            };
        });
}

/// Formats the display title for a `YYYY_MM_DD.md` file name.
pub fn title_from_file_name(file_name: &str) -> Result<String, StoreError> {
    let stem = file_name
        .strip_suffix(JOURNAL_SUFFIX)
        .unwrap_or(file_name)
        .replace('_', "-");

    if !is_date_shaped(&stem) {
        return Err(StoreError::InvalidFileName {
            file_name: file_name.to_string(),
            source: None,
        });
    }

    let date = NaiveDate::parse_from_str(&stem, DATE_FORMAT).map_err(|source| {
        return StoreError::InvalidFileName {
            file_name: file_name.to_string(),
            source: Some(source),
        };
    })?;

    return Ok(date.format(TITLE_FORMAT).to_string());
}

async fn read_entry(path: &Path, file_name: &str) -> Result<Entry, StoreError> {
    let title = title_from_file_name(file_name)?;
    let bytes = fs::read(path)
        .await
        .map_err(|source| {
            return StoreError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            };
        })?;

    let content = String::from_utf8_lossy(&bytes).to_string();
    return Ok(Entry::new(file_name, &title, &content));
}

/// Journal files named `YYYY_MM_DD.md` in one directory, newest first.
pub struct FileStore {
    dir: PathBuf,
    strict: bool,
    entries: EntryCollection,
}

impl FileStore {
    /// With `strict`, the first malformed name or unreadable file fails the
    /// whole load instead of being skipped.
    pub fn new(dir: PathBuf, strict: bool) -> FileStore {
        return FileStore {
            dir,
            strict,
            entries: EntryCollection::default(),
        };
    }

    fn directory_unreadable(&self, source: std::io::Error) -> StoreError {
        return StoreError::DirectoryUnreadable {
            path: self.dir.clone(),
            source,
        };
    }
}

#[async_trait]
impl EntryStore for FileStore {
    fn name(&self) -> StoreName {
        return StoreName::Files;
    }

    async fn load(&mut self) -> Result<LoadReport, StoreError> {
        let mut read_dir = fs::read_dir(&self.dir)
            .await
            .map_err(|err| return self.directory_unreadable(err))?;

        let mut entries = vec![];
        let mut warnings = vec![];
        while let Some(dir_entry) = read_dir
            .next_entry()
            .await
            .map_err(|err| return self.directory_unreadable(err))?
        {
            let file_name = dir_entry.file_name().to_string_lossy().to_string();
            if !file_name.ends_with(JOURNAL_SUFFIX) {
                continue;
            }

            let res = match dir_entry.file_type().await {
                Ok(file_type) if file_type.is_dir() => continue,
                Ok(_) => read_entry(&dir_entry.path(), &file_name).await,
                Err(source) => Err(StoreError::FileUnreadable {
                    path: dir_entry.path(),
                    source,
                }),
            };

            match res {
                Ok(entry) => entries.push(entry),
                Err(err) if self.strict => return Err(err),
                Err(err) => {
                    tracing::warn!(file = file_name, error = %err, "skipping journal file");
                    warnings.push(LoadWarning::new(&file_name, &err));
                }
            }
        }

        warnings.sort_by(|a, b| return a.file_name.cmp(&b.file_name));
        self.entries = EntryCollection::sorted_by_name_desc(entries);

        tracing::info!(
            dir = %self.dir.display(),
            loaded = self.entries.len(),
            skipped = warnings.len(),
            "loaded journal"
        );

        return Ok(LoadReport {
            loaded: self.entries.len(),
            warnings,
        });
    }

    fn list(&self) -> &[Entry] {
        return self.entries.as_slice();
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        return self.entries.get(name);
    }

    fn commit(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| return StoreError::EntryNotFound(name.to_string()))?;
        entry.content = content.to_string();

        return Ok(());
    }
}
