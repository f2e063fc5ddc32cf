//! Integration Tests for the Cache API
//!
//! Exercises the full path: application key/value in, store bytes out,
//! and back, over the in-memory backend.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use kvcache::{Cache, CacheConfig, CacheKey, CacheStore, FlushScope, MemoryStore, Ttl};

// == Helper Functions ==

fn create_cache(prefix: &str) -> (Cache, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = CacheConfig {
        key_prefix: prefix.to_string(),
        ..CacheConfig::default()
    };
    let cache = Cache::new(store.clone(), config).unwrap();
    (cache, store)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    roles: Vec<String>,
}

// == Set / Get Round Trips ==

#[tokio::test]
async fn test_set_then_get_without_expiry() {
    let (cache, _) = create_cache("app:");

    let user = User {
        name: "A".to_string(),
        roles: vec!["admin".to_string()],
    };

    assert!(cache.set("user:1", &user, 0.0).await.unwrap());
    let loaded: Option<User> = cache.get("user:1").await.unwrap();

    assert_eq!(loaded, Some(user));
}

#[tokio::test]
async fn test_get_miss_returns_none() {
    let (cache, _) = create_cache("app:");

    let loaded: Option<Value> = cache.get("never-set").await.unwrap();
    assert_eq!(loaded, None);
}

#[tokio::test]
async fn test_set_overwrites_previous_value() {
    let (cache, _) = create_cache("");

    cache.set("counter", &json!(1), 0.0).await.unwrap();
    cache.set("counter", &json!(2), 0.0).await.unwrap();

    let loaded: Option<Value> = cache.get("counter").await.unwrap();
    assert_eq!(loaded, Some(json!(2)));
}

#[tokio::test]
async fn test_composite_keys_round_trip() {
    let (cache, _) = create_cache("app:");

    let key = CacheKey::Map(vec![
        ("page".to_string(), CacheKey::Int(3)),
        ("user".to_string(), CacheKey::Int(42)),
    ]);

    cache.set(key.clone(), &json!(["a", "b"]), 0.0).await.unwrap();

    // Same entries, different order: must reach the same store key
    let reordered = CacheKey::Map(vec![
        ("user".to_string(), CacheKey::Int(42)),
        ("page".to_string(), CacheKey::Int(3)),
    ]);
    let loaded: Option<Value> = cache.get(reordered).await.unwrap();
    assert_eq!(loaded, Some(json!(["a", "b"])));
}

// == TTL Expiration ==

#[tokio::test]
async fn test_fractional_ttl_expires() {
    let (cache, _) = create_cache("app:");

    cache
        .set("user:1", &json!({"name": "A"}), 0.1)
        .await
        .unwrap();

    // Live within the 100ms window
    let loaded: Option<Value> = cache.get("user:1").await.unwrap();
    assert_eq!(loaded, Some(json!({"name": "A"})));

    tokio::time::sleep(Duration::from_millis(150)).await;

    let loaded: Option<Value> = cache.get("user:1").await.unwrap();
    assert_eq!(loaded, None, "Entry should have expired");
}

#[tokio::test]
async fn test_zero_duration_persists() {
    let (cache, _) = create_cache("app:");

    cache.set("pinned", &json!(true), 0.0).await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;

    let loaded: Option<Value> = cache.get("pinned").await.unwrap();
    assert_eq!(loaded, Some(json!(true)));
}

// == Add Semantics ==

#[tokio::test]
async fn test_add_wins_only_once() {
    let (cache, _) = create_cache("app:");

    assert!(cache.add("k", &json!("v1"), 0.0).await.unwrap());
    assert!(!cache.add("k", &json!("v2"), 0.0).await.unwrap());

    let loaded: Option<Value> = cache.get("k").await.unwrap();
    assert_eq!(loaded, Some(json!("v1")), "Losing add must not overwrite");
}

#[tokio::test]
async fn test_concurrent_adds_exactly_one_succeeds() {
    let (cache, _) = create_cache("app:");

    let a = cache.clone();
    let b = cache.clone();
    let task_a =
        tokio::spawn(async move { a.add("lock:job42", &json!("owner-A"), 5.0).await.unwrap() });
    let task_b =
        tokio::spawn(async move { b.add("lock:job42", &json!("owner-B"), 5.0).await.unwrap() });

    let won_a = task_a.await.unwrap();
    let won_b = task_b.await.unwrap();

    assert!(won_a ^ won_b, "Exactly one concurrent add must succeed");

    let owner: Option<Value> = cache.get("lock:job42").await.unwrap();
    let expected = if won_a { "owner-A" } else { "owner-B" };
    assert_eq!(owner, Some(json!(expected)));
}

#[tokio::test]
async fn test_add_succeeds_after_expiry() {
    let (cache, _) = create_cache("app:");

    assert!(cache.add("lease", &json!("first"), 0.05).await.unwrap());
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(
        cache.add("lease", &json!("second"), 0.0).await.unwrap(),
        "Expired entry should not block a new add"
    );
}

// == Exists / Delete ==

#[tokio::test]
async fn test_exists_then_delete() {
    let (cache, _) = create_cache("app:");

    cache.set("k", &json!(1), 0.0).await.unwrap();
    assert!(cache.exists("k").await.unwrap());

    assert!(cache.delete("k").await.unwrap());
    assert!(!cache.exists("k").await.unwrap());
    let gone: Option<Value> = cache.get("k").await.unwrap();
    assert_eq!(gone, None);
}

#[tokio::test]
async fn test_exists_false_after_expiry() {
    let (cache, _) = create_cache("app:");

    cache.set("k", &json!(1), 0.05).await.unwrap();
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert!(!cache.exists("k").await.unwrap());
}

// == Flush ==

#[tokio::test]
async fn test_flush_clears_namespace_only() {
    let (cache, store) = create_cache("app:");

    cache.set("k1", &json!(1), 0.0).await.unwrap();
    cache.set("k2", &json!(2), 0.0).await.unwrap();
    // A neighbor writing to the same store under another prefix
    store
        .set("billing:invoice", b"7".to_vec(), Ttl::None)
        .await
        .unwrap();

    assert!(cache.flush().await.unwrap());

    assert!(!cache.exists("k1").await.unwrap());
    assert!(!cache.exists("k2").await.unwrap());
    assert!(
        store.exists("billing:invoice").await.unwrap(),
        "Namespace flush must not touch foreign keys"
    );
}

#[tokio::test]
async fn test_flush_store_scope_truncates_everything() {
    let store = Arc::new(MemoryStore::new());
    let cache = Cache::new(
        store.clone(),
        CacheConfig {
            key_prefix: "app:".to_string(),
            flush_scope: FlushScope::Store,
            ..CacheConfig::default()
        },
    )
    .unwrap();

    cache.set("k1", &json!(1), 0.0).await.unwrap();
    store
        .set("billing:invoice", b"7".to_vec(), Ttl::None)
        .await
        .unwrap();

    assert!(cache.flush().await.unwrap());
    assert!(store.is_empty().await, "Store scope truncates shared data too");
}

#[tokio::test]
async fn test_flush_is_idempotent() {
    let (cache, _) = create_cache("app:");

    cache.set("k", &json!(1), 0.0).await.unwrap();
    assert!(cache.flush().await.unwrap());
    assert!(cache.flush().await.unwrap());
    assert!(!cache.exists("k").await.unwrap());
}
