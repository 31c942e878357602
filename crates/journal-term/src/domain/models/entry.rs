#[cfg(test)]
#[path = "entry_test.rs"]
mod tests;

/// A named block of text shown in the side panel and the main panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    /// Stable identifier. The file name for journal files.
    pub name: String,
    /// Display label.
    pub title: String,
    pub content: String,
}

impl Entry {
    pub fn new(name: &str, title: &str, content: &str) -> Entry {
        return Entry {
            name: name.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        };
    }

    /// An entry whose title is its name.
    pub fn named(name: &str, content: &str) -> Entry {
        return Entry::new(name, name, content);
    }
}

/// Ordered entries, unique by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    /// Keeps the given order. Later duplicates of a name are dropped.
    pub fn new(entries: Vec<Entry>) -> EntryCollection {
        let mut collection = EntryCollection::default();
        for entry in entries {
            if collection.get(&entry.name).is_some() {
                tracing::warn!(name = entry.name, "dropping duplicate entry");
                continue;
            }
            collection.entries.push(entry);
        }

        return collection;
    }

    /// Orders entries by name, most recent date first for `YYYY_MM_DD` names.
    pub fn sorted_by_name_desc(mut entries: Vec<Entry>) -> EntryCollection {
        entries.sort_by(|a, b| return b.name.cmp(&a.name));
        return EntryCollection::new(entries);
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        return self.entries.iter().find(|e| return e.name == name);
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        return self.entries.iter_mut().find(|e| return e.name == name);
    }

    pub fn as_slice(&self) -> &[Entry] {
        return &self.entries;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        return self.entries.iter();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
