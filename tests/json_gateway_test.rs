use chrono::Utc;
use promptbox::api::PromptStore;
use promptbox::config::PromptBoxConfig;
use promptbox::gateway::fs::{JsonFileGateway, STORAGE_FILENAME};
use promptbox::gateway::PersistenceGateway;
use promptbox::model::{Preferences, PromptEntry, Snapshot, StorageKey, Theme};
use std::fs;
use tempfile::TempDir;

fn entry(name: &str, content: &str) -> PromptEntry {
    PromptEntry {
        file_name: name.to_string(),
        content: content.to_string(),
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let gateway = JsonFileGateway::new(dir.path().join("nested"));

    let snapshot = gateway.get(&StorageKey::ALL).await.unwrap();
    assert_eq!(snapshot, Snapshot::default());
}

#[tokio::test]
async fn test_set_merges_keys() {
    let dir = TempDir::new().unwrap();
    let gateway = JsonFileGateway::new(dir.path().to_path_buf());

    let entries = vec![entry("a.txt", "alpha")];
    gateway
        .set(Snapshot::history(&entries, "alpha"))
        .await
        .unwrap();

    let prefs = Preferences {
        theme: Theme::Dark,
        ..Preferences::default()
    };
    gateway.set(Snapshot::preferences(&prefs)).await.unwrap();

    let snapshot = gateway.get(&StorageKey::ALL).await.unwrap();
    assert_eq!(snapshot.entries, Some(entries));
    assert_eq!(snapshot.active_content.as_deref(), Some("alpha"));
    assert_eq!(snapshot.preferences, Some(prefs));
}

#[tokio::test]
async fn test_get_selects_requested_keys() {
    let dir = TempDir::new().unwrap();
    let gateway = JsonFileGateway::new(dir.path().to_path_buf());
    gateway
        .set(Snapshot::history(&[entry("a.txt", "alpha")], "alpha"))
        .await
        .unwrap();

    let snapshot = gateway.get(&[StorageKey::ActiveContent]).await.unwrap();
    assert_eq!(snapshot.active_content.as_deref(), Some("alpha"));
    assert!(snapshot.entries.is_none());
    assert!(snapshot.preferences.is_none());
}

#[tokio::test]
async fn test_write_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let gateway = JsonFileGateway::new(dir.path().to_path_buf());
    gateway
        .set(Snapshot::history(&[], ""))
        .await
        .unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![STORAGE_FILENAME.to_string()]);
}

#[tokio::test]
async fn test_document_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let gateway = JsonFileGateway::new(dir.path().to_path_buf());
    gateway
        .set(Snapshot::history(&[entry("a.txt", "alpha")], "alpha"))
        .await
        .unwrap();

    let raw = fs::read_to_string(gateway.storage_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["activeContent"], "alpha");
    assert_eq!(json["entries"][0]["fileName"], "a.txt");
}

#[tokio::test]
async fn test_partial_preferences_fill_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(STORAGE_FILENAME),
        r#"{"preferences": {"fontSize": 20}}"#,
    )
    .unwrap();

    let store = PromptStore::load(
        JsonFileGateway::new(dir.path().to_path_buf()),
        &PromptBoxConfig::default(),
    )
    .await
    .unwrap();
    assert_eq!(store.preferences().font_size, 20);
    assert!(store.preferences().word_wrap);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_corrupt_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(STORAGE_FILENAME), "{not json").unwrap();

    let gateway = JsonFileGateway::new(dir.path().to_path_buf());
    assert!(gateway.get(&StorageKey::ALL).await.is_err());
}

#[tokio::test]
async fn test_store_session_survives_reload() {
    let dir = TempDir::new().unwrap();
    let config = PromptBoxConfig::default();

    let mut store = PromptStore::load(JsonFileGateway::new(dir.path().to_path_buf()), &config)
        .await
        .unwrap();
    store
        .update_active_content("测试测试测试测试测试测试")
        .await
        .unwrap();
    store.create_entry().await.unwrap();
    store.update_active_content("second").await.unwrap();
    store.promote(1).await.unwrap();

    let reloaded = PromptStore::load(JsonFileGateway::new(dir.path().to_path_buf()), &config)
        .await
        .unwrap();
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.active_content(), "测试测试测试测试测试测试");
    assert!(reloaded.entries()[0]
        .file_name
        .ends_with("_测试测试测试测试测试.txt"));
}
