use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};

fn ctx(frame: u64) -> SceneCtx {
    SceneCtx::new(
        FrameIndex(frame),
        Fps::integer(30).unwrap(),
        Canvas::FULL_HD,
        FeaturesDemo::DURATION,
    )
}

fn at(frame: u64) -> FeaturesFrame {
    FeaturesFrame::sample(&ctx(frame)).unwrap()
}

#[test]
fn cards_enter_fifteen_frames_apart() {
    let starts: Vec<i64> = (0..6).map(|i| CARDS_AT.start(i)).collect();
    assert_eq!(starts, vec![30, 45, 60, 75, 90, 105]);

    let v = at(44);
    assert!(v.cards[0] > 0.0);
    assert!(v.cards[1..].iter().all(|&c| c == 0.0));

    let v = at(46);
    assert!(v.cards[1] > 0.0);
    assert_eq!(v.cards[2], 0.0);
}

#[test]
fn card_is_hidden_exactly_at_its_start() {
    assert_eq!(at(30).cards[0], 0.0);
    assert_eq!(at(105).cards[5], 0.0);
    assert!(at(106).cards[5] > 0.0);
}

#[test]
fn cards_settle_by_the_end() {
    let v = at(299);
    for c in v.cards {
        assert!((c - 1.0).abs() < 0.01, "{c}");
    }
}

#[test]
fn marquee_appears_at_200_and_slides_left() {
    assert_eq!(at(199).marquee_x, None);
    assert_eq!(at(200).marquee_x, Some(0.0));
    assert_eq!(at(250).marquee_x, Some(-250.0));
    assert_eq!(at(299).marquee_x, Some(-495.0));

    let over = FeaturesFrame::sample(&ctx(400)).unwrap();
    assert_eq!(over.marquee_x, Some(-500.0));
}

#[test]
fn marquee_lists_each_tech_twice() {
    let tree = FeaturesDemo.render(&ctx(250), &Theme::default()).unwrap();
    for tech in TECH {
        let n = tree.iter().filter(|n| n.as_text() == Some(tech)).count();
        assert_eq!(n, 2, "{tech}");
    }
    let before = FeaturesDemo.render(&ctx(199), &Theme::default()).unwrap();
    assert!(before.find_text("NLP").is_none());
}

#[test]
fn grid_has_three_columns_and_six_cards() {
    let tree = FeaturesDemo.render(&ctx(150), &Theme::default()).unwrap();
    let grid = tree
        .iter()
        .find(|n| n.style.grid_columns == Some(3))
        .unwrap();
    assert_eq!(grid.children.len(), 6);
    for (_, title, description) in FEATURES {
        assert!(tree.find_text(title).is_some());
        assert!(tree.find_text(description).is_some());
    }
    assert!(tree.text_content().contains("Powerful Capabilities"));
}
