use super::*;
use crate::style::resolver::resolve;

const DOC: &str = r##"
{
  "root": { "--neu-background": "#eeeeee", "default-neu-height": "3", "neu-bogus": "x" },
  "nodes": [
    { "id": "panel", "data": { "neuHeight": "8", "neuWidth": "100" }, "vars": { "neu-intensity": "0.4" } },
    { "id": "button", "parent": "panel", "data": { "defaultNeuPressure": "-0.2" } }
  ]
}
"##;

#[test]
fn loads_nodes_data_and_vars_from_json() {
    let tree = StyleTree::from_json_str(DOC).unwrap();
    assert_eq!(tree.len(), 2);

    let panel = tree.node("panel").unwrap();
    let button = tree.node("button").unwrap();
    assert_eq!(tree.parent(button), Some(panel));
    assert_eq!(tree.name(button), Some("button"));

    assert_eq!(tree.local(panel, Param::Height).as_deref(), Some("8"));
    assert_eq!(tree.local_default(button, Param::Pressure).as_deref(), Some("-0.2"));
    assert_eq!(tree.local(button, Param::Pressure), None);
}

#[test]
fn style_variables_inherit_from_ancestors_then_root() {
    let tree = StyleTree::from_json_str(DOC).unwrap();
    let button = tree.node("button").unwrap();

    assert_eq!(
        tree.style_var(button, Param::Intensity, VarScope::Primary).as_deref(),
        Some("0.4")
    );
    assert_eq!(
        tree.style_var(button, Param::Background, VarScope::Primary).as_deref(),
        Some("#eeeeee")
    );
    assert_eq!(
        tree.style_var(button, Param::Height, VarScope::Default).as_deref(),
        Some("3")
    );
    assert_eq!(tree.style_var(button, Param::Height, VarScope::Primary), None);
}

#[test]
fn cascade_over_loaded_tree() {
    let tree = StyleTree::from_json_str(DOC).unwrap();
    let button = tree.node("button").unwrap();
    assert_eq!(resolve(&tree, button, Param::Height, None).as_deref(), Some("8"));
    assert_eq!(resolve(&tree, button, Param::Direction, None), None);
}

#[test]
fn rejects_unknown_parent() {
    let json = r#"{ "nodes": [ { "id": "a", "parent": "ghost" } ] }"#;
    assert!(matches!(
        StyleTree::from_json_str(json),
        Err(NeuError::Validation(_))
    ));
}

#[test]
fn rejects_children_listed_before_parents() {
    let json = r#"{ "nodes": [ { "id": "b", "parent": "a" }, { "id": "a" } ] }"#;
    assert!(matches!(
        StyleTree::from_json_str(json),
        Err(NeuError::Validation(_))
    ));
}

#[test]
fn rejects_duplicate_ids() {
    let json = r#"{ "nodes": [ { "id": "a" }, { "id": "a" } ] }"#;
    assert!(matches!(
        StyleTree::from_json_str(json),
        Err(NeuError::Validation(_))
    ));
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        StyleTree::from_json_str("{ nodes: "),
        Err(NeuError::Serde(_))
    ));
}

#[test]
fn add_node_requires_existing_parent() {
    let mut tree = StyleTree::new();
    assert!(tree.is_empty());
    assert!(matches!(
        tree.add_node("orphan", Some(NodeId(7))),
        Err(NeuError::Validation(_))
    ));
}

#[test]
fn writes_to_unknown_nodes_are_ignored() {
    let mut tree = StyleTree::new();
    tree.set_local(NodeId(3), Param::Height, "1");
    tree.set_var(Some(NodeId(3)), Param::Height, VarScope::Primary, "1");
    assert_eq!(tree.local(NodeId(3), Param::Height), None);
    assert_eq!(tree.style_var(NodeId(3), Param::Height, VarScope::Primary), None);
}

#[test]
fn empty_document_is_valid() {
    let tree = StyleTree::from_json_str("{}").unwrap();
    assert!(tree.is_empty());
}
