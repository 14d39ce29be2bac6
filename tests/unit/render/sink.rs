use super::*;
use crate::render::fingerprint::fingerprint_node;
use crate::scene::node::Node;

fn cfg() -> SinkConfig {
    SinkConfig {
        composition: "Demo".to_owned(),
        width: 1920,
        height: 1080,
        fps: Fps::integer(30).unwrap(),
        range: FrameRange::from_duration(2),
    }
}

fn snap(frame: u64) -> Snapshot {
    let root = Node::text("still");
    Snapshot {
        composition: "Demo".to_owned(),
        frame: FrameIndex(frame),
        width: 1920,
        height: 1080,
        fingerprint: fingerprint_node(&root).unwrap(),
        root,
    }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("ethereal_promo_sink_{}", std::process::id()))
        .join(name)
}

#[test]
fn in_memory_sink_keeps_order_and_flags() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(&snap(0), false).unwrap();
    sink.push_frame(&snap(1), true).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config().unwrap().composition, "Demo");
    let frames: Vec<(u64, bool)> = sink
        .frames()
        .iter()
        .map(|f| (f.snapshot.frame.0, f.is_repeat))
        .collect();
    assert_eq!(frames, vec![(0, false), (1, true)]);
    assert!(sink.is_ended());
}

#[test]
fn json_lines_sink_writes_full_then_repeat_lines() {
    let path = temp_path("nested/out.jsonl");
    let _ = std::fs::remove_dir_all(path.parent().unwrap());

    let mut sink = JsonLinesSink::new(&path);
    sink.begin(cfg()).unwrap();
    sink.push_frame(&snap(0), false).unwrap();
    sink.push_frame(&snap(1), true).unwrap();
    sink.end().unwrap();
    assert_eq!(sink.lines_written(), 2);

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["frame"], 0);
    assert_eq!(lines[0]["root"]["kind"]["text"], "still");
    assert_eq!(lines[1]["repeat"], true);
    assert_eq!(lines[1]["fingerprint"], lines[0]["fingerprint"]);
    assert!(lines[1].get("root").is_none());

    let _ = std::fs::remove_dir_all(temp_path(""));
}

#[test]
fn json_lines_sink_rejects_frames_before_begin() {
    let mut sink = JsonLinesSink::new(temp_path("never.jsonl"));
    let err = sink.push_frame(&snap(0), false).unwrap_err();
    assert!(err.to_string().contains("used before begin"));
}
