use super::*;
use crate::style::props::Style;

#[test]
fn equal_trees_hash_equal() {
    let a = Node::boxed().child(Node::text("EtherealSearch"));
    let b = Node::boxed().child(Node::text("EtherealSearch"));
    assert_eq!(fingerprint_node(&a).unwrap(), fingerprint_node(&b).unwrap());
}

#[test]
fn any_style_change_moves_the_hash() {
    let base = Node::text("x").with_style(Style::new().opacity(0.5));
    let moved = Node::text("x").with_style(Style::new().opacity(0.51));
    assert_ne!(
        fingerprint_node(&base).unwrap(),
        fingerprint_node(&moved).unwrap()
    );
}

#[test]
fn display_is_32_hex_digits() {
    let fp = FrameFingerprint { hi: 1, lo: 0xab };
    assert_eq!(fp.to_string(), "000000000000000100000000000000ab");
    let real = fingerprint_node(&Node::fill()).unwrap().to_string();
    assert_eq!(real.len(), 32);
    assert!(real.chars().all(|c| c.is_ascii_hexdigit()));
}
