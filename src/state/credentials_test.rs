use super::*;

#[test]
fn fresh_store_reads_none() {
    let store = CredentialStore::default();
    assert_eq!(store.read(), None);
}

#[test]
fn write_then_read_round_trips() {
    let store = CredentialStore::default();
    store.write("tok_abc");
    assert_eq!(store.read(), Some("tok_abc".to_owned()));
}

#[test]
fn write_fully_replaces_previous_token() {
    let store = CredentialStore::default();
    store.write("tok_old");
    store.write("tok_new");
    assert_eq!(store.read(), Some("tok_new".to_owned()));
}

#[test]
fn clear_removes_token() {
    let store = CredentialStore::default();
    store.write("tok_abc");
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clear_on_empty_store_is_harmless() {
    let store = CredentialStore::default();
    store.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn clones_share_the_same_cell() {
    let store = CredentialStore::default();
    let clone = store.clone();
    store.write("tok_abc");
    assert_eq!(clone.read(), Some("tok_abc".to_owned()));
    clone.clear();
    assert_eq!(store.read(), None);
}

#[test]
fn independent_stores_do_not_share_state() {
    let a = CredentialStore::default();
    let b = CredentialStore::default();
    a.write("tok_abc");
    assert_eq!(b.read(), None);
}
