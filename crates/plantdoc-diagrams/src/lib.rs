//! PlantUML diagram rendering for plantdoc.
//!
//! This crate turns fenced code blocks marked as PlantUML source into
//! rendered image files:
//! - [`DiagramBlock`] is the explicit input: text, classes, attributes,
//!   identifier, as supplied by the host document tree
//! - [`Materializer`] derives a content hash, renders via the external
//!   `plantuml` executable on cache miss, and returns replacement image data
//! - [`ArtifactStore`] is the content-addressed on-disk cache
//!
//! # Architecture
//!
//! The crate is organized into modules:
//! - [`block`]: `DiagramBlock` input struct and boundary validation
//! - [`cache`]: `CacheKey` computation and the `ArtifactStore`
//! - [`format`]: `ImageFormat` and the hint-based `FormatPolicy`
//! - [`plantuml`]: PlantUML source normalization
//! - [`renderer`]: external renderer subprocess invocation
//! - [`materializer`]: the conversion pipeline tying it all together
//!
//! # Example
//!
//! ```ignore
//! use plantdoc_diagrams::{DiagramBlock, Materializer, MaterializerConfig};
//!
//! let materializer = Materializer::new(MaterializerConfig::default());
//! let block = DiagramBlock {
//!     text: "A -> B".into(),
//!     classes: vec!["plantuml".into()],
//!     attributes: vec![("caption".into(), "seq".into())],
//!     identifier: "fig1".into(),
//! };
//!
//! // Some(image) with the artifact path, or None for non-diagram blocks
//! let image = materializer.materialize(&block, Some("html"))?;
//! ```

mod block;
mod cache;
mod consts;
mod error;
mod format;
mod materializer;
mod plantuml;
mod renderer;

pub use block::DiagramBlock;
pub use cache::{ArtifactStore, CacheKey};
pub use error::DiagramError;
pub use format::{FormatPolicy, ImageFormat};
pub use materializer::{Materializer, MaterializerConfig, RenderedImage};
