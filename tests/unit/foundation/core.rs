use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(180), FrameIndex(360)).unwrap();
    assert!(!r.contains(FrameIndex(179)));
    assert!(r.contains(FrameIndex(180)));
    assert!(r.contains(FrameIndex(359)));
    assert!(!r.contains(FrameIndex(360)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(2), FrameIndex(2)).unwrap().is_empty());
}

#[test]
fn frame_range_clamp_and_shift() {
    let r = FrameRange::from_duration(10);
    assert_eq!(r.clamp(FrameIndex(42)), FrameIndex(9));
    let shifted = r.shift(-3);
    assert_eq!(shifted.start, FrameIndex(0));
    assert_eq!(shifted.end, FrameIndex(7));
    assert_eq!(r.shift(5).len_frames(), 10);
}

#[test]
fn fps_validates_and_converts() {
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());

    let fps = Fps::integer(30).unwrap();
    assert_eq!(fps.as_f64(), 30.0);
    assert_eq!(fps.frames_to_secs(900), 30.0);
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn canvas_rect_matches_dimensions() {
    let r = Canvas::FULL_HD.rect();
    assert_eq!(r.width(), 1920.0);
    assert_eq!(r.height(), 1080.0);
}
