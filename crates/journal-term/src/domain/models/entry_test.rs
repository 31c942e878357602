use super::*;

#[test]
fn it_sorts_by_name_descending() {
    let collection = EntryCollection::sorted_by_name_desc(vec![
        Entry::named("2023_12_31.md", ""),
        Entry::named("2024_01_02.md", ""),
        Entry::named("2024_01_01.md", ""),
    ]);

    let names = collection
        .iter()
        .map(|e| return e.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["2024_01_02.md", "2024_01_01.md", "2023_12_31.md"]);
}

#[test]
fn it_keeps_insertion_order() {
    let collection = EntryCollection::new(vec![
        Entry::named("Journal", ""),
        Entry::named("Dissertation", ""),
        Entry::named("Softwaredesign", ""),
    ]);

    assert_eq!(collection.as_slice()[0].name, "Journal");
    assert_eq!(collection.as_slice()[2].name, "Softwaredesign");
}

#[test]
fn it_drops_duplicate_names() {
    let collection = EntryCollection::new(vec![
        Entry::named("Journal", "first"),
        Entry::named("Journal", "second"),
    ]);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get("Journal").unwrap().content, "first");
}

#[test]
fn it_mutates_content_by_name() {
    let mut collection = EntryCollection::new(vec![Entry::named("Journal", "old")]);
    collection.get_mut("Journal").unwrap().content = "new".to_string();

    assert_eq!(collection.get("Journal").unwrap().content, "new");
    assert!(collection.get_mut("Missing").is_none());
}
