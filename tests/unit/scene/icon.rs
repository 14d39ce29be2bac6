use super::*;

#[test]
fn tokens_round_trip_through_from_str() {
    for name in IconName::ALL {
        assert_eq!(name.as_str().parse::<IconName>().unwrap(), name);
    }
    assert_eq!("X-Circle".parse::<IconName>().unwrap(), IconName::XCircle);
    assert!("rocket".parse::<IconName>().is_err());
}

#[test]
fn serde_token_matches_as_str() {
    for name in IconName::ALL {
        let v = serde_json::to_value(name).unwrap();
        assert_eq!(v, name.as_str());
    }
}

#[test]
fn every_outline_parses_and_fits_the_view_box() {
    for name in IconName::ALL {
        let bounds = name.definition().bounds().unwrap();
        assert!(bounds.width() > 0.0 && bounds.height() > 0.0, "{name:?}");
        assert!(bounds.x0 >= -0.5 && bounds.y0 >= -0.5, "{name:?}: {bounds:?}");
        assert!(
            bounds.x1 <= ICON_VIEW_BOX + 0.5 && bounds.y1 <= ICON_VIEW_BOX + 0.5,
            "{name:?}: {bounds:?}"
        );
    }
}

#[test]
fn check_is_an_open_polyline() {
    let path = IconName::Check.definition().outline().unwrap();
    let els = path.elements();
    assert_eq!(els.len(), 3);
    assert!(!els.iter().any(|e| matches!(e, PathEl::ClosePath)));

    let play = IconName::Play.definition().outline().unwrap();
    assert!(matches!(play.elements().last(), Some(PathEl::ClosePath)));
}

#[test]
fn layers_bounds_span_the_stack() {
    let b = IconName::Layers.definition().bounds().unwrap();
    assert!((b.x0 - 2.0).abs() < 1e-9);
    assert!((b.x1 - 22.0).abs() < 1e-9);
    assert!((b.y0 - 2.0).abs() < 1e-9);
    assert!((b.y1 - 22.0).abs() < 1e-9);
}

#[test]
fn svg_markup_carries_stroke_and_primitives() {
    let svg = IconName::Search
        .definition()
        .to_svg(Color::rgb(0x6b, 0x72, 0x80), 2.0, 24.0);
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r##"stroke="#6b7280""##));
    assert!(svg.contains(r#"<circle cx="11" cy="11" r="8"/>"#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn icon_ref_defaults_to_two_px_solid_stroke() {
    let r = IconRef::new(IconName::Brain, 28.0, Color::WHITE);
    assert_eq!(r.stroke_width, 2.0);
    assert_eq!(r.stroke, Paint::solid(Color::WHITE));
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["name"], "brain");
}
