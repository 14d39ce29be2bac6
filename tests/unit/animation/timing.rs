use super::*;

#[test]
fn stagger_start_is_base_plus_index_times_interval() {
    let s = Stagger::new(30, 15);
    assert_eq!(s.start(0), 30);
    assert_eq!(s.start(1), 45);
    assert_eq!(s.start(5), 105);
    assert_eq!(s.local_frame(50, 1), 5);
    assert_eq!(s.local_frame(40, 1), -5);
}

#[test]
fn staggered_items_do_not_start_together() {
    let s = Stagger::new(30, 20);
    for i in 1..3 {
        assert_ne!(s.start(0), s.start(i));
        let frame = s.start(0);
        assert!(s.has_started(frame, 0));
        assert!(!s.has_started(frame, i));
    }

    let flat = Stagger::new(30, 0);
    assert_eq!(flat.start(0), flat.start(4));
}

#[test]
fn window_predicates_partition_the_timeline() {
    let w = Stagger::new(130, 55).window(1, 55);
    assert_eq!(w, Window::new(185, 55));

    for frame in 0..400 {
        let states = [
            !w.is_active(frame) && !w.is_complete(frame),
            w.is_active(frame),
            w.is_complete(frame),
        ];
        assert_eq!(states.iter().filter(|s| **s).count(), 1, "frame {frame}");
    }

    assert!(!w.is_active(184));
    assert!(w.is_active(185));
    assert!(w.is_active(239));
    assert!(w.is_complete(240));
}

#[test]
fn window_progress_is_linear_while_active() {
    let w = Window::new(100, 50);
    assert_eq!(w.progress(10), 0.0);
    assert_eq!(w.progress(100), 0.0);
    assert_eq!(w.progress(125), 0.5);
    assert_eq!(w.progress(150), 1.0);
    assert_eq!(w.phase(99), Phase::Pending);
    assert_eq!(w.phase(125), Phase::Active { progress: 0.5 });
    assert_eq!(w.phase(150), Phase::Complete);
}

#[test]
fn pulse_and_blink_are_periodic() {
    assert_eq!(pulse(0, 0.1, 0.02), 1.0);
    for f in 0..200 {
        let p = pulse(f, 0.1, 0.02);
        assert!((0.98..=1.02).contains(&p));
    }
    assert!(!blink(0, 0.2));
    assert!(blink(1, 0.2));
    assert!(!blink(16, 0.2));
}
