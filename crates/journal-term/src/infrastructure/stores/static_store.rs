#[cfg(test)]
#[path = "static_store_test.rs"]
mod tests;

use async_trait::async_trait;

use crate::domain::models::Entry;
use crate::domain::models::EntryCollection;
use crate::domain::models::EntryStore;
use crate::domain::models::LoadReport;
use crate::domain::models::StoreError;
use crate::domain::models::StoreName;

const NOTES: [(&str, &str); 3] = [
    (
        "Journal",
        "Heute: Journal-Ansicht fertigstellen\nMorgen: Lesezeichen aufräumen",
    ),
    ("Dissertation", "Uni-Kurse evaluieren"),
    ("Softwaredesign", "Kapitel über Modulgrenzen lesen"),
];

fn notes() -> EntryCollection {
    return EntryCollection::new(
        NOTES
            .iter()
            .map(|(name, content)| return Entry::named(name, content))
            .collect(),
    );
}

/// A fixed set of named notes held in memory.
pub struct StaticStore {
    entries: EntryCollection,
}

impl Default for StaticStore {
    fn default() -> StaticStore {
        return StaticStore { entries: notes() };
    }
}

#[async_trait]
impl EntryStore for StaticStore {
    fn name(&self) -> StoreName {
        return StoreName::Notes;
    }

    async fn load(&mut self) -> Result<LoadReport, StoreError> {
        self.entries = notes();
        return Ok(LoadReport {
            loaded: self.entries.len(),
            warnings: vec![],
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
