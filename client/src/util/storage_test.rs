#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_json_is_none_outside_browser() {
    assert_eq!(load_json::<String>("stockroom_session"), None);
}

#[test]
fn save_and_remove_are_noops_but_callable() {
    assert_eq!(save_json("stockroom_session", &"value"), Ok(()));
    remove("stockroom_session");
    assert_eq!(load_json::<String>("stockroom_session"), None);
}

#[test]
fn storage_error_messages_name_the_cause() {
    assert_eq!(StorageError::Unavailable.to_string(), "session storage is unavailable");
    let err = StorageError::Write { key: "stockroom_session".to_owned(), message: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "could not write stockroom_session: QuotaExceededError");
}
