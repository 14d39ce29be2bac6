use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::node::NodeKind;

fn ctx(frame: u64, duration: u64) -> SceneCtx {
    SceneCtx::new(
        FrameIndex(frame),
        Fps::integer(30).unwrap(),
        Canvas::FULL_HD,
        duration,
    )
}

fn promo_at(frame: u64) -> Node {
    PromoVideo::new()
        .unwrap()
        .render(&ctx(frame, PromoVideo::DURATION), &Theme::default())
        .unwrap()
}

#[test]
fn timeline_is_five_contiguous_windows() {
    let promo = PromoVideo::new().unwrap();
    let rows = promo.sequence().windows();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        ["Opening", "Problem", "Solution", "CallToAction", "Closing"]
    );
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.window.start, FrameIndex(i as u64 * SCENE_FRAMES));
        assert_eq!(row.window.len_frames(), SCENE_FRAMES);
    }
    assert_eq!(promo.sequence().total_duration(), PromoVideo::DURATION);
}

#[test]
fn each_window_shows_its_own_copy() {
    assert!(promo_at(0).find_text(opening::TAGLINE).is_some());
    assert!(promo_at(185).find_text("The Challenge").is_some());
    assert!(promo_at(185).find_text(opening::TAGLINE).is_none());
    assert!(promo_at(400).find_text(solution::PITCH).is_some());
    assert!(promo_at(600).find_text("Start Free Trial").is_some());
    assert!(promo_at(899).find_text(closing::SITE).is_some());
}

#[test]
fn problem_bullets_follow_their_stagger() {
    let theme = Theme::default();
    let opacities = |local: u64| -> Vec<f64> {
        let tree = Problem.render(&ctx(local, SCENE_FRAMES), &theme).unwrap();
        problem::PROBLEMS
            .iter()
            .map(|text| {
                tree.iter()
                    .find(|n| n.children.iter().any(|c| c.as_text() == Some(*text)))
                    .unwrap()
                    .style
                    .opacity_value()
            })
            .collect()
    };

    assert_eq!(opacities(30), vec![0.0, 0.0, 0.0]);
    let v = opacities(51);
    assert!(v[0] > 0.0 && v[1] > 0.0);
    assert_eq!(v[2], 0.0);
    assert!(opacities(179).iter().all(|&o| o > 0.99));
}

#[test]
fn solution_pitch_fades_between_30_and_60() {
    let theme = Theme::default();
    let pitch_opacity = |local: u64| {
        Solution
            .render(&ctx(local, SCENE_FRAMES), &theme)
            .unwrap()
            .find_text(solution::PITCH)
            .unwrap()
            .style
            .opacity_value()
    };
    assert_eq!(pitch_opacity(10), 0.0);
    assert!((pitch_opacity(45) - 0.5).abs() < 1e-12);
    assert_eq!(pitch_opacity(100), 1.0);
    assert_eq!(solution::STATS_AT.start(2), 90);
}

#[test]
fn cta_button_pulses() {
    let theme = Theme::default();
    let scale_at = |local: u64| {
        let tree = CallToAction
            .render(&ctx(local, SCENE_FRAMES), &theme)
            .unwrap();
        let button = tree.find_text("Start Free Trial").unwrap();
        match button.style.transform_value().ops() {
            [crate::style::props::TransformOp::Scale(s)] => *s,
            other => panic!("unexpected transform {other:?}"),
        }
    };
    assert_eq!(scale_at(0), 1.0);
    let expected = 1.0 + (16.0f64 * 0.1).sin() * 0.02;
    assert!((scale_at(16) - expected).abs() < 1e-12);
    assert!(scale_at(16) > 1.0);
}

#[test]
fn cta_title_breaks_before_the_highlight() {
    let tree = CallToAction
        .render(&ctx(90, SCENE_FRAMES), &Theme::default())
        .unwrap();
    assert!(tree.iter().any(|n| matches!(n.kind, NodeKind::LineBreak)));
    assert!(tree.find_text("Engineering Workflow?").is_some());
}

#[test]
fn closing_scales_in_from_nothing() {
    let tree = Closing
        .render(&ctx(0, SCENE_FRAMES), &Theme::default())
        .unwrap();
    let content = tree
        .iter()
        .find(|n| n.children.iter().any(|c| c.as_text() == Some(closing::SITE)))
        .unwrap();
    assert_eq!(content.style.opacity_value(), 0.0);
}

#[test]
fn promo_exposes_its_timeline() {
    let promo = PromoVideo::new().unwrap();
    let rows = promo.timeline().unwrap();
    assert_eq!(rows, promo.sequence().windows());
    assert!(Opening.timeline().is_none());
}
