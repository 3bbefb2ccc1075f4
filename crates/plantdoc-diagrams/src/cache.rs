//! Content-addressed cache for rendered diagram artifacts.
//!
//! Provides [`CacheKey`] for computing content-based hashes and
//! [`ArtifactStore`] for deriving the on-disk paths keyed by them.

use std::io;
use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::format::ImageFormat;

/// Content hash used as both cache key and filename stem.
///
/// Computed over the exact UTF-8 bytes of the diagram source, with no
/// normalization: byte-identical text always maps to the same key, and any
/// difference (including whitespace) produces a different key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey(String);

impl CacheKey {
    /// Compute the key for a diagram source text.
    ///
    /// # Hash Format
    ///
    /// Hex-encoded SHA-256 of the source bytes (64 lowercase hex characters).
    #[must_use]
    pub fn of(source: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// The key as lowercase hex.
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

/// On-disk artifact store addressed by [`CacheKey`].
///
/// Existence of the artifact file at its derived path is the sole cache-hit
/// signal: no metadata, TTL, or invalidation mechanism exists. Entries are
/// never evicted or refreshed; a changed rendering of identical source text
/// requires clearing the directory by hand.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory itself is created lazily by
    /// [`ensure_root`](Self::ensure_root).
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the root directory if absent. Safe under repeated calls.
    pub fn ensure_root(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }

    /// Path of the rendered artifact for `key` in `format`.
    #[must_use]
    pub fn artifact_path(&self, key: &CacheKey, format: ImageFormat) -> PathBuf {
        self.root
            .join(format!("{}.{}", key.as_hex(), format.extension()))
    }

    /// Path of the intermediate `.uml` source file for `key`.
    ///
    /// The file is written on every cache miss and left in place afterwards.
    #[must_use]
    pub fn source_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(format!("{}.uml", key.as_hex()))
    }
}
