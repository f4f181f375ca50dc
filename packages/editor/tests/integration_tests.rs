//! Integration tests for editor crate

use blueprint_editor::{Action, Document, EditorConfig, EditorError};
use blueprint_model::{NodeType, Snapshot};
use tempfile::TempDir;

#[test]
fn test_document_lifecycle() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("site.json");

    let mut doc = Document::create(&path, EditorConfig::default());
    doc.save()?;
    assert!(!doc.is_dirty());

    let section = doc.snapshot().root.children[1].id.clone();
    let mut doc = Document::load(&path, EditorConfig::default())?;
    assert_eq!(doc.snapshot().root.children[1].id, section);

    let actions: Vec<Action> = serde_json::from_str(&format!(
        r#"[
            {{ "type": "ADD_COMPONENT", "parentId": "{section}",
               "node": {{ "id": "intro", "type": "paragraph", "data": {{ "text": "Welcome" }} }} }},
            {{ "type": "WRAP_IN_CONTAINER", "nodeId": "intro", "containerType": "container" }}
        ]"#
    ))?;
    for action in actions {
        doc.apply(action)?;
    }
    assert_eq!(doc.version, 2);
    assert!(doc.is_dirty());
    doc.save()?;

    let reloaded = Document::load(&path, EditorConfig::default())?;
    assert_eq!(reloaded.snapshot(), doc.snapshot());
    let wrapper = &reloaded.snapshot().root.children[1].children[0];
    assert_eq!(wrapper.node_type, NodeType::Container);
    assert_eq!(wrapper.children[0].id, "intro");
    Ok(())
}

#[test]
fn test_saved_file_is_pretty_json() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("site.json");
    let mut doc = Document::create(&path, EditorConfig::default());
    doc.save()?;

    let text = std::fs::read_to_string(&path)?;
    assert!(text.starts_with("{\n  \"root\": {"));
    let snapshot = Snapshot::from_json(&text)?;
    assert_eq!(&snapshot, doc.snapshot());
    Ok(())
}

#[test]
fn test_load_missing_root() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{}")?;

    let err = Document::load(&path, EditorConfig::default()).unwrap_err();
    assert!(matches!(err, EditorError::Model(_)));
    assert_eq!(err.to_string(), "Model error: Snapshot missing root");
    Ok(())
}

#[test]
fn test_load_invalid_tree_with_guards() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("invalid.json");
    std::fs::write(
        &path,
        r#"{ "root": { "id": "p", "type": "page", "children": [
            { "id": "h", "type": "heading", "data": { "text": "" } }
        ] } }"#,
    )?;

    let guarded = EditorConfig::default().with_dev_guards(true);
    let err = Document::load(&path, guarded).unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));

    let relaxed = EditorConfig::default().with_dev_guards(false);
    assert!(Document::load(&path, relaxed).is_ok());
    Ok(())
}

#[test]
fn test_save_as_moves_document() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let mut doc = Document::create(dir.path().join("a.json"), EditorConfig::default());
    let target = dir.path().join("b.json");
    doc.save_as(&target)?;
    assert_eq!(doc.path, target);
    assert!(target.exists());
    assert!(!dir.path().join("a.json").exists());
    Ok(())
}

#[test]
fn test_action_serialization() -> anyhow::Result<()> {
    let action = Action::Reorder {
        parent_id: "s".into(),
        from: 1,
        to: 0,
    };
    let json = serde_json::to_string(&action)?;
    assert_eq!(json, r#"{"type":"REORDER","parentId":"s","from":1,"to":0}"#);
    let back: Action = serde_json::from_str(&json)?;
    assert_eq!(back, action);
    Ok(())
}
