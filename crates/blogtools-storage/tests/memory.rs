use blogtools_storage::error::StorageError;
use blogtools_storage::memory::{blob_sha, MemoryStore};
use blogtools_storage::store::ContentStore;
use blogtools_storage::tools::{publish_tool, recent_tools};

const BASE: &str = "https://acme.github.io/tools";

#[test]
fn blob_sha_matches_git() {
    // `printf '<div>x</div>' | git hash-object --stdin`
    assert_eq!(blob_sha(b"<div>x</div>"), "03f9e8c55fc619fbfea7adb968a4074da6a9e379");
}

#[tokio::test]
async fn create_then_update_with_revision() {
    let store = MemoryStore::new();
    assert_eq!(store.get("a.html").await.unwrap(), None);

    let r1 = store.put("a.html", b"<div>x</div>".to_vec(), None).await.unwrap();
    assert_eq!(store.get("a.html").await.unwrap().as_deref(), Some(r1.as_str()));

    let r2 = store
        .put("a.html", b"<div>v2</div>".to_vec(), Some(r1.as_str()))
        .await
        .unwrap();
    assert_eq!(r2, "6801d5da5e66ea21319f961c6b1a3f9c6a22197c");
    assert_eq!(store.read("a.html").await.unwrap(), b"<div>v2</div>");
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn stale_or_missing_revisions_conflict() {
    let store = MemoryStore::new();
    let r1 = store.put("a.html", b"one".to_vec(), None).await.unwrap();

    // Create over an existing file.
    let err = store.put("a.html", b"two".to_vec(), None).await.unwrap_err();
    assert!(matches!(err, StorageError::Conflict { .. }));

    // Two writers read r1; the second one loses.
    store.put("a.html", b"two".to_vec(), Some(r1.as_str())).await.unwrap();
    let err = store
        .put("a.html", b"three".to_vec(), Some(r1.as_str()))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict { .. }));
    assert_eq!(store.read("a.html").await.unwrap(), b"two");
}

#[tokio::test]
async fn nested_paths_are_rejected() {
    let store = MemoryStore::new();
    let err = store.put("dir/a.html", Vec::new(), None).await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidPath(_)));
}

#[tokio::test]
async fn publishing_twice_updates_the_same_file() {
    let store = MemoryStore::new();

    let first = publish_tool(&store, BASE, "widget.html", "<div>x</div>")
        .await
        .unwrap();
    assert_eq!(first.url, "https://acme.github.io/tools/widget.html");
    assert_eq!(first.sha, blob_sha(b"<div>x</div>"));

    let second = publish_tool(&store, BASE, "widget.html", "<div>v2</div>")
        .await
        .unwrap();
    assert_eq!(second.url, first.url);
    assert_ne!(second.sha, first.sha);

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(store.read("widget.html").await.unwrap(), b"<div>v2</div>");
}

#[tokio::test]
async fn recent_lists_html_newest_first() {
    let store = MemoryStore::new();
    store.put("first.html", b"1".to_vec(), None).await.unwrap();
    store.put("notes.md", b"#".to_vec(), None).await.unwrap();
    store.put("second.html", b"2".to_vec(), None).await.unwrap();
    store.put("style.css", b"x".to_vec(), None).await.unwrap();

    let tools = recent_tools(&store, BASE).await.unwrap();
    let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["second.html", "first.html"]);
    assert_eq!(tools[0].url, "https://acme.github.io/tools/second.html");
    assert_eq!(tools[0].sha, blob_sha(b"2"));
}
