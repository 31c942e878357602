use super::*;

#[test]
fn it_parses_without_arguments() {
    let matches = build().try_get_matches_from(["journal"]).unwrap();

    assert_eq!(matches.get_one::<String>(ARG_LOG_LEVEL).unwrap(), "warn");
    assert!(!matches.get_flag(ARG_DUMP_CONFIG));
    assert!(matches
        .get_one::<String>(&ConfigKey::JournalDir.to_string())
        .is_none());
}

#[test]
fn it_parses_store_and_journal_dir() {
    let matches = build()
        .try_get_matches_from(["journal", "--store", "notes", "--journal-dir", "/tmp/j"])
        .unwrap();

    assert_eq!(
        matches.get_one::<String>(&ConfigKey::Store.to_string()).unwrap(),
        "notes"
    );
    assert_eq!(
        matches
            .get_one::<String>(&ConfigKey::JournalDir.to_string())
            .unwrap(),
        "/tmp/j"
    );
}

#[test]
fn it_rejects_unknown_stores() {
    let res = build().try_get_matches_from(["journal", "--store", "sqlite"]);
    assert!(res.is_err());
}
