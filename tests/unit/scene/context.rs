use super::*;

fn ctx(frame: u64) -> SceneCtx {
    SceneCtx::new(
        FrameIndex(frame),
        Fps::integer(30).unwrap(),
        Canvas::FULL_HD,
        180,
    )
}

#[test]
fn spring_respects_delay() {
    let c = ctx(10);
    assert_eq!(c.spring(15.0, SpringConfig::damped(10.0)), 0.0);
    assert!(c.spring(0.0, SpringConfig::damped(10.0)) > 0.0);
}

#[test]
fn interpolate_uses_local_frame() {
    let v = ctx(55)
        .interpolate(&[45.0, 65.0], &[0.0, 1.0], InterpolateOpts::clamp_right())
        .unwrap();
    assert!((v - 0.5).abs() < 1e-12);
    assert!(
        ctx(0)
            .interpolate(&[1.0, 1.0], &[0.0, 1.0], InterpolateOpts::default())
            .is_err()
    );
}

#[test]
fn rebase_keeps_timeline_settings() {
    let c = ctx(185).rebase(5, 180);
    assert_eq!(c.frame, FrameIndex(5));
    assert_eq!(c.duration, 180);
    assert_eq!(c.canvas, Canvas::FULL_HD);
    assert_eq!(c.frame_i64(), 5);
}
