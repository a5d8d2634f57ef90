use dercor::core::store::Store;
use dercor::initialize_store;
use dercor::plugins::assistant::{proposal_text, recommendation, STYLES, UNAVAILABLE};
use dercor::plugins::profile::first_user;
use dercor::plugins::projects::{list_projects, save_proposal, ProjectKind};
use tempfile::tempdir;

#[test]
fn test_known_styles_have_recommendations() {
    assert_eq!(STYLES.len(), 4);
    for style in STYLES {
        assert!(recommendation(style).is_some(), "missing style {}", style);
    }
}

#[test]
fn test_unknown_style_yields_placeholder_frame() {
    let text = proposal_text("Rococó");
    assert!(text.starts_with("Propuesta para estilo Rococó:"));
    assert!(text.contains(UNAVAILABLE));
}

#[test]
fn test_saved_proposal_round_trip() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().to_path_buf();
    initialize_store(&root).unwrap();
    let store = Store { root };
    let user_id = first_user(&store).unwrap().unwrap().id;

    let text = proposal_text("Moderno");
    save_proposal(&store, user_id, "Moderno", &text).unwrap();

    let items = list_projects(&store, user_id, Some(ProjectKind::Propuesta)).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Propuesta Moderno");
    assert!(items[0].payload.contains("Sofá modular"));
}
