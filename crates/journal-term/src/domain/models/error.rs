//! Typed failures of the entry stores.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("journal directory '{}' is unreadable: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("journal file '{}' is unreadable: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("journal file name '{file_name}' is not a date in the form YYYY_MM_DD")]
    InvalidFileName {
        file_name: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("no entry named '{0}'")]
    EntryNotFound(String),
}
