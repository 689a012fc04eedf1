use super::*;

#[test]
fn fresh_state_points_at_home() {
    assert_eq!(SessionState::new().current_section, Section::Home);
    assert_eq!(SessionState::default(), SessionState::new());
}

#[test]
fn last_selection_wins() {
    let mut state = SessionState::new();
    state.select(Section::Embeddings);
    state.select(Section::VectorStores);
    assert_eq!(state.current_section, Section::VectorStores);
}

#[test]
fn selecting_same_section_twice_is_idempotent() {
    let mut state = SessionState::new();
    state.select(Section::RagExample);
    let after_first = state;
    state.select(Section::RagExample);
    assert_eq!(state, after_first);
}

#[test]
fn any_section_can_follow_any_other() {
    for from in Section::ALL {
        for to in Section::ALL {
            let mut state = SessionState { current_section: from };
            state.select(to);
            assert_eq!(state.current_section, to);
        }
    }
}

#[test]
fn triggers_map_to_every_section_except_home() {
    let targets: Vec<Section> = NavTrigger::ALL.iter().map(|t| t.section()).collect();
    assert_eq!(
        targets,
        vec![
            Section::DocumentLoaders,
            Section::Embeddings,
            Section::VectorStores,
            Section::RagExample,
        ]
    );
    assert!(!targets.contains(&Section::Home));
}

#[test]
fn section_labels_parse_back() {
    for section in Section::ALL {
        assert_eq!(section.label().parse::<Section>(), Ok(section));
    }
    assert!("home".parse::<Section>().is_err());
    assert!("Vector Store".parse::<Section>().is_err());
}

#[test]
fn trigger_keys_parse_back() {
    assert_eq!("vector_stores".parse::<NavTrigger>(), Ok(NavTrigger::VectorStores));
    assert_eq!("rag".parse::<NavTrigger>(), Ok(NavTrigger::Rag));
    let err = "home".parse::<NavTrigger>().expect_err("home is not a trigger");
    assert_eq!(err.to_string(), "unknown trigger: \"home\"");
}

#[test]
fn sections_serialize_as_labels() {
    let json = serde_json::to_string(&Section::DocumentLoaders).expect("json");
    assert_eq!(json, "\"Document Loaders\"");
    let trigger: NavTrigger = serde_json::from_str("\"vector_stores\"").expect("trigger");
    assert_eq!(trigger, NavTrigger::VectorStores);
}

#[test]
fn session_id_round_trips_through_display() {
    let id = SessionId::generate();
    let parsed: SessionId = id.to_string().parse().expect("parse");
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<SessionId>().is_err());
}
