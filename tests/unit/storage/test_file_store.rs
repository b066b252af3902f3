use edu_client::error::AppError;
use edu_client::storage::{FileStore, SessionStore};
use serde_json::{Value, json};
use std::fs;
use std::thread;
use tempfile::tempdir;

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));

    assert_eq!(store.token().unwrap(), None);
    assert_eq!(store.user_raw().unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    FileStore::new(&path).save("T1", r#"{"id":1,"name":"A"}"#).unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.token().unwrap().as_deref(), Some("T1"));
    assert_eq!(
        reopened.user_raw().unwrap().as_deref(),
        Some(r#"{"id":1,"name":"A"}"#)
    );

    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        json!({ "authToken": "T1", "user": "{\"id\":1,\"name\":\"A\"}" })
    );
}

#[test]
fn test_file_store_clear_keeps_unrelated_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(
        &path,
        r#"{"authToken":"T1","user":"{\"id\":1}","locale":"ru"}"#,
    )
    .unwrap();

    let store = FileStore::new(&path);
    store.clear().unwrap();

    assert_eq!(store.token().unwrap(), None);
    assert_eq!(store.user_raw().unwrap(), None);
    let on_disk: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, json!({ "locale": "ru" }));
}

#[test]
fn test_file_store_clear_without_file_is_noop() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));
    store.clear().unwrap();
    assert!(!store.path().exists());
}

#[test]
fn test_file_store_unreadable_file_is_reported_then_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json at all").unwrap();

    let store = FileStore::new(&path);
    match store.token() {
        Err(AppError::Storage(message)) => assert!(message.contains("session.json")),
        other => panic!("Expected Storage error, got {other:?}"),
    }

    store.save("T9", r#"{"id":9}"#).unwrap();
    assert_eq!(store.token().unwrap().as_deref(), Some("T9"));
}

#[test]
fn test_file_store_corrupt_file_can_be_cleared() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "{broken").unwrap();

    let store = FileStore::new(&path);
    store.clear().unwrap();
    assert_eq!(store.token().unwrap(), None);
}

#[test]
fn test_file_store_concurrent_instances_on_one_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let path = path.clone();
            thread::spawn(move || {
                let store = FileStore::new(&path);
                let mut failures = 0;
                for i in 0..100 {
                    let token = format!("T{worker}-{i}");
                    let user = format!(r#"{{"id":{worker}}}"#);
                    if store.save(&token, &user).is_err() {
                        failures += 1;
                    }
                }
                failures
            })
        })
        .collect();

    let failures: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(failures, 0);

    let store = FileStore::new(&path);
    let token = store.token().unwrap().unwrap();
    assert!(token.ends_with("-99"), "unexpected last token {token}");
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name != "session.json")
        .collect();
    assert!(leftovers.is_empty(), "temporary files left behind: {leftovers:?}");
}
