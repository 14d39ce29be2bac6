use super::*;
use crate::scene::icon::IconName;
use crate::style::color::Color;

fn sample() -> Node {
    Node::fill().child(
        Node::boxed()
            .child(Node::text("See the "))
            .child(Node::text("Magic"))
            .child(Node::line_break())
            .child(Node::icon(IconRef::new(IconName::Check, 24.0, Color::WHITE))),
    )
}

#[test]
fn iter_is_pre_order() {
    let tree = sample();
    let kinds: Vec<&str> = tree
        .iter()
        .map(|n| match n.kind {
            NodeKind::Fill => "fill",
            NodeKind::Box => "box",
            NodeKind::Text(_) => "text",
            NodeKind::Icon(_) => "icon",
            NodeKind::LineBreak => "br",
        })
        .collect();
    assert_eq!(kinds, vec!["fill", "box", "text", "text", "br", "icon"]);
}

#[test]
fn text_content_concatenates_runs() {
    assert_eq!(sample().text_content(), "See the Magic");
    assert!(sample().find_text("Magic").is_some());
    assert!(sample().find_text("magic").is_none());
}

#[test]
fn child_if_skips_when_false() {
    let n = Node::boxed()
        .child_if(false, || Node::text("hidden"))
        .child_if(true, || Node::text("shown"));
    assert_eq!(n.children.len(), 1);
    assert_eq!(n.children[0].as_text(), Some("shown"));
}

#[test]
fn serialization_skips_empty_style_and_children() {
    let v = serde_json::to_value(Node::text("hi")).unwrap();
    assert_eq!(v, serde_json::json!({ "kind": { "text": "hi" } }));

    let v = serde_json::to_value(Node::fill()).unwrap();
    assert_eq!(v, serde_json::json!({ "kind": "fill" }));
}
