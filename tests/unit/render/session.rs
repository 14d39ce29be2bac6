use super::*;
use crate::render::sink::InMemorySink;

struct Still;

impl Scene for Still {
    fn name(&self) -> &str {
        "Still"
    }

    fn render(&self, _ctx: &SceneCtx, _theme: &Theme) -> PromoResult<Node> {
        Ok(Node::text("static"))
    }
}

/// Changes every 4th frame.
struct Steps;

impl Scene for Steps {
    fn name(&self) -> &str {
        "Steps"
    }

    fn render(&self, ctx: &SceneCtx, _theme: &Theme) -> PromoResult<Node> {
        Ok(Node::text(format!("step {}", ctx.frame.0 / 4)))
    }
}

fn registry() -> Registry {
    let mut reg = Registry::new();
    reg.register(CompositionSpec::full_hd_30("Still", 10).unwrap(), Still)
        .unwrap();
    reg.register(CompositionSpec::full_hd_30("Steps", 20).unwrap(), Steps)
        .unwrap();
    reg
}

fn session(id: &str, opts: RenderSessionOpts) -> RenderSession {
    RenderSession::new(&registry(), id, Theme::default(), opts).unwrap()
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn render_frame_bounds_are_checked() {
    let s = session("Still", RenderSessionOpts::default());
    assert!(s.render_frame(FrameIndex(9)).is_ok());
    let err = s.render_frame(FrameIndex(10)).unwrap_err();
    assert!(err.to_string().contains("outside composition 'Still'"));
}

#[test]
fn snapshot_carries_canvas_and_identity() {
    let s = session("Steps", RenderSessionOpts::default());
    let snap = s.render_frame(FrameIndex(5)).unwrap();
    assert_eq!(snap.composition, "Steps");
    assert_eq!(snap.frame, FrameIndex(5));
    assert_eq!((snap.width, snap.height), (1920, 1080));
    assert_eq!(snap.root.as_text(), Some("step 1"));
    assert_eq!(snap.fingerprint, fingerprint_node(&snap.root).unwrap());
}

#[test]
fn unknown_composition_and_zero_threads_are_rejected() {
    let reg = registry();
    assert!(RenderSession::new(&reg, "Nope", Theme::default(), Default::default()).is_err());
    let opts = RenderSessionOpts {
        parallel: true,
        threads: Some(0),
        ..Default::default()
    };
    assert!(RenderSession::new(&reg, "Still", Theme::default(), opts).is_err());
}

#[test]
fn range_must_be_non_empty_and_inside_duration() {
    let s = session("Still", RenderSessionOpts::default());
    let mut sink = InMemorySink::new();
    assert!(s.render_range(range(3, 3), &mut sink).is_err());
    assert!(s.render_range(range(0, 11), &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[test]
fn frames_arrive_in_order_across_chunks() {
    let s = session(
        "Steps",
        RenderSessionOpts {
            chunk_size: 3,
            ..Default::default()
        },
    );
    let mut sink = InMemorySink::new();
    let stats = s.render_range(range(2, 13), &mut sink).unwrap();
    assert_eq!(stats.frames_total, 11);
    assert_eq!(stats.frames_elided, 0);
    let frames: Vec<u64> = sink.frames().iter().map(|f| f.snapshot.frame.0).collect();
    assert_eq!(frames, (2..13).collect::<Vec<_>>());
    assert!(sink.is_ended());
    assert_eq!(sink.config().unwrap().range, range(2, 13));
}

#[test]
fn parallel_matches_sequential() {
    let seq = session("Steps", RenderSessionOpts::default());
    let par = session(
        "Steps",
        RenderSessionOpts {
            parallel: true,
            chunk_size: 5,
            threads: Some(3),
            static_frame_elision: false,
        },
    );
    let mut a = InMemorySink::new();
    let mut b = InMemorySink::new();
    let sa = seq.render_range(range(0, 20), &mut a).unwrap();
    let sb = par.render_range(range(0, 20), &mut b).unwrap();
    assert_eq!(sa, sb);
    let snaps = |s: &InMemorySink| -> Vec<Snapshot> {
        s.frames().iter().map(|f| f.snapshot.clone()).collect()
    };
    assert_eq!(snaps(&a), snaps(&b));
}

#[test]
fn elision_flags_repeats_of_the_previous_frame() {
    let opts = RenderSessionOpts {
        chunk_size: 3,
        static_frame_elision: true,
        ..Default::default()
    };
    let s = session("Steps", opts);
    let mut sink = InMemorySink::new();
    let stats = s.render_range(range(0, 8), &mut sink).unwrap();

    let flags: Vec<bool> = sink.frames().iter().map(|f| f.is_repeat).collect();
    assert_eq!(
        flags,
        vec![false, true, true, true, false, true, true, true]
    );
    assert_eq!(stats.frames_total, 8);
    assert_eq!(stats.frames_rendered, 2);
    assert_eq!(stats.frames_elided, 6);

    let still = session("Still", RenderSessionOpts {
        static_frame_elision: true,
        ..Default::default()
    });
    let mut sink = InMemorySink::new();
    let stats = still.render_range(range(0, 10), &mut sink).unwrap();
    assert_eq!((stats.frames_rendered, stats.frames_elided), (1, 9));
}
