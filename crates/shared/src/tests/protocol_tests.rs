use super::*;

#[test]
fn notice_names_the_selected_section() {
    let notice = Notice::navigating_to(Section::Embeddings);
    assert_eq!(notice.message, "Navigating to Embeddings section...");
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.section, Section::Embeddings);
}

#[test]
fn snapshot_serializes_section_label() {
    let id = SessionId::generate();
    let mut state = SessionState::new();
    state.select(Section::VectorStores);
    let value = serde_json::to_value(SessionSnapshot::new(id, state)).expect("json");
    assert_eq!(value["current_section"], "Vector Stores");
    assert_eq!(value["session_id"], id.to_string());
}

#[test]
fn select_request_accepts_trigger_keys_only() {
    let req: SelectRequest = serde_json::from_str(r#"{"trigger":"loaders"}"#).expect("json");
    assert_eq!(req.trigger, NavTrigger::Loaders);
    assert!(serde_json::from_str::<SelectRequest>(r#"{"trigger":"Home"}"#).is_err());
}
