use std::io;

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::{PromoError, PromoResult};
use crate::scene::node::Node;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// 128-bit content hash of a frame's visual tree.
///
/// Two frames with the same fingerprint serialize to the same tree, so a host may reuse the
/// previous frame's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash the JSON form of `root`. The frame index is not part of the tree, so identical
/// stills at different frames share a fingerprint.
pub fn fingerprint_node(root: &Node) -> PromoResult<FrameFingerprint> {
    let mut h = StableHasher::new();
    serde_json::to_writer(&mut h, root)
        .map_err(|e| PromoError::serde(format!("failed to hash frame tree: {e}")))?;
    Ok(h.finish())
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl io::Write for StableHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
