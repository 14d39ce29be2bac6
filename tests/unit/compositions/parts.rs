use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};

#[test]
fn lift_maps_progress_to_offset() {
    assert_eq!(lift(0.0, 30.0).unwrap(), 30.0);
    assert_eq!(lift(1.0, 30.0).unwrap(), 0.0);
    assert!((lift(0.5, -30.0).unwrap() + 15.0).abs() < 1e-12);
    // Overshoot carries past the rest position.
    assert!(lift(1.1, 30.0).unwrap() < 0.0);
}

#[test]
fn stagger_progress_is_zero_until_start() {
    let stagger = Stagger::new(30, 20);
    let ctx = |f: u64| {
        SceneCtx::new(
            FrameIndex(f),
            Fps::integer(30).unwrap(),
            Canvas::FULL_HD,
            180,
        )
    };
    assert_eq!(stagger_progress(&ctx(49), stagger, 1), 0.0);
    assert_eq!(stagger_progress(&ctx(50), stagger, 1), 0.0);
    assert!(stagger_progress(&ctx(51), stagger, 1) > 0.0);
}

#[test]
fn logo_pairs_mark_and_word() {
    let node = logo(&Theme::default(), 2.5);
    assert_eq!(node.children.len(), 2);
    assert_eq!(node.children[1].as_text(), Some("EtherealSearch"));
    assert_eq!(
        node.style.transform_value().ops(),
        &[crate::style::props::TransformOp::Scale(2.5)]
    );
}

#[test]
fn heading_skips_empty_parts() {
    let h = heading(&Theme::default(), 56.0, "Powerful ", "Capabilities", "");
    assert_eq!(h.children.len(), 2);
    assert_eq!(h.text_content(), "Powerful Capabilities");
}
