use super::*;

fn store() -> SessionStore {
    SessionStore::new(Duration::seconds(60))
}

#[tokio::test]
async fn new_session_starts_at_home() {
    let store = store();
    let (id, state) = store.create().await;
    assert_eq!(state.current_section, Section::Home);
    assert_eq!(store.get(id).await, Some(state));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn initialize_does_not_reset_existing_session() {
    let store = store();
    let (id, _) = store.create().await;
    store.select(id, Section::Embeddings).await.expect("select");

    let state = store.initialize(id).await;
    assert_eq!(state.current_section, Section::Embeddings);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn select_overwrites_with_last_write() {
    let store = store();
    let (id, _) = store.create().await;
    store.select(id, Section::Embeddings).await.expect("select");
    let state = store.select(id, Section::VectorStores).await.expect("select");
    assert_eq!(state.current_section, Section::VectorStores);
}

#[tokio::test]
async fn sessions_do_not_share_state() {
    let store = store();
    let (alice, _) = store.create().await;
    let (bob, _) = store.create().await;
    store.select(alice, Section::RagExample).await.expect("select");

    assert_eq!(
        store.get(bob).await.map(|s| s.current_section),
        Some(Section::Home)
    );
}

#[tokio::test]
async fn select_on_unknown_session_fails() {
    let store = store();
    let err = store
        .select(SessionId::generate(), Section::Embeddings)
        .await
        .expect_err("should fail");
    assert!(matches!(err, StoreError::SessionNotFound { .. }));
}

#[tokio::test]
async fn end_removes_session() {
    let store = store();
    let (id, _) = store.create().await;
    assert!(store.end(id).await);
    assert!(!store.end(id).await);
    assert_eq!(store.get(id).await, None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn sweep_drops_only_idle_sessions() {
    let store = store();
    let (stale, _) = store.create().await;
    let (fresh, _) = store.create().await;
    let stale_seen = store.record(stale).await.expect("record").last_seen;

    {
        let mut sessions = store.sessions.write().await;
        sessions.get_mut(&stale).expect("stale").last_seen = stale_seen - Duration::seconds(120);
    }

    let removed = store.sweep_expired(Utc::now()).await;
    assert_eq!(removed, 1);
    assert_eq!(store.get(stale).await, None);
    assert!(store.get(fresh).await.is_some());
}

#[tokio::test]
async fn sweep_with_huge_ttl_keeps_sessions() {
    let store = SessionStore::new(Duration::seconds(9_000_000_000_000));
    let (id, _) = store.create().await;
    assert_eq!(store.sweep_expired(Utc::now()).await, 0);
    assert!(store.get(id).await.is_some());
}

#[tokio::test]
async fn get_refreshes_last_seen() {
    let store = store();
    let (id, _) = store.create().await;
    let first = store.record(id).await.expect("record");
    store.get(id).await;
    let second = store.record(id).await.expect("record");
    assert!(second.last_seen >= first.last_seen);
    assert_eq!(second.created_at, first.created_at);
}
