use super::*;

#[test]
fn builtin_registers_four_full_hd_compositions() {
    let reg = Registry::builtin().unwrap();
    let ids: Vec<&str> = reg.ids().collect();
    assert_eq!(ids, ["PromoVideo", "HeroDemo", "AgenticDemo", "FeaturesDemo"]);

    let frames: Vec<u64> = reg.iter().map(|e| e.spec.duration_frames).collect();
    assert_eq!(frames, [900, 240, 360, 300]);

    for e in reg.iter() {
        assert_eq!(e.spec.fps, Fps::integer(30).unwrap());
        assert_eq!(e.spec.canvas, Canvas::FULL_HD);
        assert_eq!(e.scene.name(), e.spec.id);
    }
    assert_eq!(reg.get("PromoVideo").unwrap().spec.duration_secs(), 30.0);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut reg = Registry::builtin().unwrap();
    let err = reg
        .register(
            CompositionSpec::full_hd_30("HeroDemo", 10).unwrap(),
            HeroDemo,
        )
        .unwrap_err();
    assert!(err.to_string().contains("duplicate composition id 'HeroDemo'"));
    assert_eq!(reg.len(), 4);
}

#[test]
fn unknown_id_lists_known_ones() {
    let reg = Registry::builtin().unwrap();
    let err = reg.get("Nope").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("validation error: unknown composition 'Nope'"));
    assert!(msg.contains("FeaturesDemo"));
}

#[test]
fn spec_validation() {
    assert!(CompositionSpec::full_hd_30("", 10).is_err());
    assert!(CompositionSpec::full_hd_30("x", 0).is_err());
    let mut spec = CompositionSpec::full_hd_30("x", 10).unwrap();
    spec.canvas.width = 0;
    assert!(spec.validate().is_err());
    assert_eq!(
        CompositionSpec::full_hd_30("x", 10).unwrap().range().len_frames(),
        10
    );
    assert!(Registry::new().is_empty());
}

#[test]
fn sequenced_scene_must_cover_its_duration() {
    let mut reg = Registry::new();
    let short = crate::scene::sequence::Sequence::builder("Short")
        .then(20, HeroDemo)
        .then(5, FeaturesDemo)
        .build()
        .unwrap();
    let err = reg
        .register(CompositionSpec::full_hd_30("Short", 30).unwrap(), short.clone())
        .unwrap_err();
    assert!(err.to_string().contains("lasts 30 frames but its timeline covers 25"));
    assert!(reg.is_empty());

    reg.register(CompositionSpec::full_hd_30("Short", 25).unwrap(), short)
        .unwrap();
    assert_eq!(reg.len(), 1);
}
