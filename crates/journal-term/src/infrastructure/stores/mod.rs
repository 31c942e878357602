pub mod file_store;
pub mod static_store;

use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::EntryStoreBox;
use crate::domain::models::StoreName;

pub struct EntryStoreManager {}

impl EntryStoreManager {
    pub fn get(name: StoreName, journal_dir: PathBuf, strict: bool) -> EntryStoreBox {
        match name {
            StoreName::Files => {
                return Box::new(file_store::FileStore::new(journal_dir, strict));
            }
            StoreName::Notes => {
                return Box::<static_store::StaticStore>::default();
            }
        }
    }

    pub fn from_config() -> Result<EntryStoreBox> {
        let raw = Config::get(ConfigKey::Store);
        if let Some(name) = StoreName::parse(&raw) {
            return Ok(EntryStoreManager::get(
                name,
                Config::journal_dir(),
                Config::is_strict(),
            ));
        }

        bail!(format!("No entry store implemented for {raw}"))
    }
}
