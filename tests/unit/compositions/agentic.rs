use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};

fn ctx(frame: u64) -> SceneCtx {
    SceneCtx::new(
        FrameIndex(frame),
        Fps::integer(30).unwrap(),
        Canvas::FULL_HD,
        AgenticDemo::DURATION,
    )
}

fn at(frame: u64) -> AgenticFrame {
    AgenticFrame::sample(&ctx(frame)).unwrap()
}

#[test]
fn query_types_between_50_and_120() {
    assert_eq!(at(0).typed, 0);
    assert_eq!(at(50).typed, 0);
    assert_eq!(at(51).typed, 0);
    assert_eq!(at(85).typed_query(), "What is the design wind speed f");
    assert_eq!(at(119).typed, QUERY.len() - 1);
    assert_eq!(at(120).typed_query(), QUERY);
    assert_eq!(at(359).typed_query(), QUERY);
}

#[test]
fn typed_length_never_decreases() {
    let mut prev = 0;
    for f in 0..200 {
        let typed = at(f).typed;
        assert!(typed >= prev);
        prev = typed;
    }
}

#[test]
fn cursor_blinks_until_typing_ends() {
    assert_eq!(at(0).cursor, Some(false));
    assert_eq!(at(1).cursor, Some(true));
    assert_eq!(at(15).cursor, Some(true));
    assert_eq!(at(16).cursor, Some(false));
    assert!(at(119).cursor.is_some());
    assert_eq!(at(120).cursor, None);
}

#[test]
fn phases_advance_every_55_frames() {
    assert!(at(129).phases.iter().all(|p| *p == Phase::Pending));

    let v = at(130);
    assert_eq!(v.phases[0], Phase::Active { progress: 0.0 });
    assert_eq!(v.phases[1], Phase::Pending);

    let v = at(185);
    assert_eq!(v.phases[0], Phase::Complete);
    assert_eq!(v.phases[1], Phase::Active { progress: 0.0 });

    let v = at(300);
    assert_eq!(v.phases[2], Phase::Complete);
    assert!(matches!(v.phases[3], Phase::Active { .. }));

    assert!(at(350).phases.iter().all(|p| *p == Phase::Complete));
}

#[test]
fn at_most_one_phase_is_active() {
    for f in 0..360 {
        let active = at(f)
            .phases
            .iter()
            .filter(|p| matches!(p, Phase::Active { .. }))
            .count();
        assert!(active <= 1, "frame {f}");
    }
}

#[test]
fn active_card_shows_progress_bar_and_description() {
    let tree = AgenticDemo.render(&ctx(160), &Theme::default()).unwrap();
    assert!(tree.find_text("Parsing your engineering query...").is_some());
    assert!(tree.find_text("Scanning knowledge base...").is_none());

    let tree = AgenticDemo.render(&ctx(200), &Theme::default()).unwrap();
    assert!(tree.find_text("Parsing your engineering query...").is_none());
    assert!(tree.find_text("Scanning knowledge base...").is_some());
    let checks = tree
        .iter()
        .filter(|n| matches!(&n.kind, crate::scene::node::NodeKind::Icon(i) if i.name == IconName::Check))
        .count();
    assert_eq!(checks, 1);
}

#[test]
fn complete_phase_uses_translucent_sky() {
    let theme = Theme::default();
    let look = PhaseLook::for_phase(Phase::Complete, &theme.palette);
    assert_eq!(look.background, theme.palette.accent_sky.with_alpha(0.1));
    let look = PhaseLook::for_phase(Phase::Active { progress: 0.5 }, &theme.palette);
    assert_eq!(look.background, theme.palette.accent_violet.with_alpha(0.1));
}

#[test]
fn result_fades_in_at_the_end() {
    assert!(at(339).result_opacity < 0.0);
    assert!((at(350).result_opacity - 0.5).abs() < 1e-12);
    let tree = AgenticDemo.render(&ctx(359), &Theme::default()).unwrap();
    assert!(tree.find_text("Analysis Complete").is_some());
    assert!(tree.find_text("115 mph").is_some());
    assert!(tree.find_text("97.3%").is_some());
}
