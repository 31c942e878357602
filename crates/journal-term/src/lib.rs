//! Terminal journal and note browser.
//!
//! A side panel lists named entries, either date-named journal files read from
//! a directory or a fixed set of notes, and a main panel shows or edits the
//! selected entry. Edits live for the session only.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey, UiConfig};
pub use domain::models::{Entry, EntryStore, EntryStoreBox, Event, LoadReport, StoreError};
pub use domain::services::{AppState, AppStateProps};
pub use infrastructure::stores::EntryStoreManager;
