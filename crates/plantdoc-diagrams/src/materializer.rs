//! Diagram materialization: cache lookup, rendering, replacement data.
//!
//! [`Materializer`] is invoked by the host once per code-block node during a
//! tree traversal the host owns. It either returns `None` (element left
//! untouched) or the data for a replacement image element.

use std::path::{Path, PathBuf};

use crate::block::DiagramBlock;
use crate::cache::{ArtifactStore, CacheKey};
use crate::consts::{CACHE_DIR_NAME, DEFAULT_RENDERER, FIGURE_TITLE};
use crate::error::DiagramError;
use crate::format::{FormatPolicy, ImageFormat};
use crate::plantuml::wrap_source;
use crate::renderer::run_renderer;

/// Materializer configuration.
///
/// Explicit state passed in at construction; the component holds no
/// process-wide or environment-derived state of its own.
#[derive(Debug, Clone)]
pub struct MaterializerConfig {
    /// Root directory of the artifact cache.
    pub cache_dir: PathBuf,
    /// Renderer command line, split on whitespace at invocation time.
    pub renderer_command: String,
}

impl Default for MaterializerConfig {
    fn default() -> Self {
        Self {
            cache_dir: std::env::temp_dir().join(CACHE_DIR_NAME),
            renderer_command: DEFAULT_RENDERER.to_owned(),
        }
    }
}

/// Replacement-element data for a materialized diagram.
///
/// The host wraps this in a paragraph-with-image node. `title` carries the
/// `fig:` sentinel its rendering pipeline interprets as a numbered figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// Absolute path of the rendered artifact.
    pub url: PathBuf,
    /// Alt text: the block's caption.
    pub alt_text: String,
    /// Identifier carried over from the code block.
    pub identifier: String,
    /// Attribute pairs carried over unchanged, `caption` included.
    pub attributes: Vec<(String, String)>,
    /// Title sentinel, always `fig:`.
    pub title: String,
}

/// Converts PlantUML code blocks into cached rendered images.
///
/// # Example
///
/// ```ignore
/// let materializer = Materializer::new(MaterializerConfig {
///     cache_dir: "/tmp/pandoc_plantuml".into(),
///     renderer_command: "java -jar plantuml.jar".into(),
/// });
/// let image = materializer.materialize(&block, Some("docx"))?;
/// ```
#[derive(Debug)]
pub struct Materializer {
    store: ArtifactStore,
    renderer_command: String,
    policy: FormatPolicy,
}

impl Materializer {
    /// Create a materializer with the default format policy.
    #[must_use]
    pub fn new(config: MaterializerConfig) -> Self {
        Self {
            store: ArtifactStore::new(config.cache_dir),
            renderer_command: config.renderer_command,
            policy: FormatPolicy::default(),
        }
    }

    /// Replace the format policy.
    #[must_use]
    pub fn with_format_policy(mut self, policy: FormatPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Materialize one code block.
    ///
    /// Returns `Ok(None)` for blocks without the marker class; the caller
    /// must leave the original element untouched. Otherwise renders the
    /// diagram (or reuses the cached artifact) and returns the replacement
    /// image data.
    ///
    /// An existing artifact file is treated as valid regardless of its age
    /// or how it was produced; rendering is skipped entirely on a hit.
    pub fn materialize(
        &self,
        block: &DiagramBlock,
        format_hint: Option<&str>,
    ) -> Result<Option<RenderedImage>, DiagramError> {
        if !block.is_diagram() {
            return Ok(None);
        }
        let caption = block.caption()?;

        self.store.ensure_root()?;

        let key = CacheKey::of(&block.text);
        let format = self.policy.resolve(format_hint);
        let artifact = self.store.artifact_path(&key, format);

        if artifact.exists() {
            tracing::debug!(path = %artifact.display(), "cache hit");
        } else {
            self.render(&block.text, &key, format, &artifact)?;
        }

        Ok(Some(RenderedImage {
            url: std::path::absolute(&artifact)?,
            alt_text: caption.to_owned(),
            identifier: block.identifier.clone(),
            attributes: block.attributes.clone(),
            title: FIGURE_TITLE.to_owned(),
        }))
    }

    /// Render a cache miss: write the `.uml` source, run the renderer, and
    /// verify it produced the artifact.
    fn render(
        &self,
        text: &str,
        key: &CacheKey,
        format: ImageFormat,
        artifact: &Path,
    ) -> Result<(), DiagramError> {
        let source_path = self.store.source_path(key);
        std::fs::write(&source_path, wrap_source(text))?;

        run_renderer(&self.renderer_command, &source_path, format)?;

        if !artifact.exists() {
            return Err(DiagramError::ArtifactMissing {
                path: artifact.to_path_buf(),
            });
        }
        tracing::info!(path = %std::path::absolute(artifact)?.display(), "created image");
        Ok(())
    }
}
