//! File store behavior through the full HTTP stack.
//!
//! The in-process unit tests cover the snapshot mechanics; here the server
//! runs against a `file:` target in a temp directory to check that API
//! mutations survive a restart, and that a broken snapshot refuses to open.

use std::sync::Arc;

use quill::config::ServerConfig;
use quill::fixtures;
use quill::http_api::HttpServer;
use quill::store::{FileStore, PostPatch, PostStore, StoreError, StoreTarget};
use serde_json::json;
use tempfile::TempDir;

fn open_target(dir: &TempDir) -> Arc<dyn PostStore> {
    let target: StoreTarget = format!("file:{}/posts.json", dir.path().display())
        .parse()
        .expect("valid store url");
    target.open().expect("open file store")
}

#[tokio::test]
async fn api_mutations_survive_restart() {
    let dir = TempDir::new().unwrap();

    // First run: create a post over HTTP.
    let id = {
        let store = open_target(&dir);
        let handle = HttpServer::new(ServerConfig::with_port(0), store)
            .start()
            .await
            .unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{}/posts", handle.base_url()))
            .json(&json!({
                "title": "Letters Never Sent",
                "content": "Some letters are written only to be kept.",
                "author": {"firstName": "Agatha", "lastName": "Christie"},
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        let created: serde_json::Value = resp.json().await.unwrap();
        handle.stop().await.unwrap();

        created["id"].as_str().unwrap().to_string()
    };

    // Second run against the same snapshot: the post is still there.
    let store = open_target(&dir);
    let handle = HttpServer::new(ServerConfig::with_port(0), store)
        .start()
        .await
        .unwrap();
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/posts/{id}", handle.base_url()))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Letters Never Sent");

    handle.stop().await.unwrap();
}

#[test]
fn seeded_collection_reopens_intact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");

    let seeded = {
        let store = FileStore::open(&path).unwrap();
        store
            .insert_many(fixtures::sample_posts_seeded(6, 42))
            .unwrap()
    };

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 6);
    assert_eq!(store.find_all().unwrap(), seeded);
}

#[test]
fn updates_and_deletes_are_durable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");

    let (kept, dropped) = {
        let store = FileStore::open(&path).unwrap();
        let posts = store
            .insert_many(fixtures::sample_posts_seeded(2, 1))
            .unwrap();
        store
            .update_by_id(
                posts[0].id,
                PostPatch {
                    title: Some("Hangman".to_string()),
                    content: None,
                },
            )
            .unwrap();
        store.delete_by_id(posts[1].id).unwrap();
        (posts[0].id, posts[1].id)
    };

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.find_by_id(kept).unwrap().unwrap().title, "Hangman");
    assert!(store.find_by_id(dropped).unwrap().is_none());
}

#[test]
fn corrupt_snapshot_refuses_to_open() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("posts.json");
    std::fs::write(&path, b"\x00\xff not a snapshot").unwrap();

    let target: StoreTarget = format!("file:{}", path.display()).parse().unwrap();
    let result = target.open();
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}
