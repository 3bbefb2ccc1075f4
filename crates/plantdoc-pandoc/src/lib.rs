//! Pandoc JSON document filtering for plantdoc.
//!
//! This crate owns the host side of the conversion: it walks a pandoc
//! document (as `serde_json::Value`, so unknown node types round-trip
//! untouched) and hands each fenced code block to the
//! [`Materializer`](plantdoc_diagrams::Materializer), replacing diagram
//! blocks with paragraph-wrapped image elements.
//!
//! # Example
//!
//! ```ignore
//! use plantdoc_diagrams::{Materializer, MaterializerConfig};
//! use plantdoc_pandoc::filter_document;
//!
//! let mut doc: serde_json::Value = serde_json::from_str(&stdin_json)?;
//! let materializer = Materializer::new(MaterializerConfig::default());
//! filter_document(&mut doc, &materializer, Some("html"))?;
//! ```

mod element;
mod error;
mod filter;

pub use element::{code_block_parts, image_paragraph};
pub use error::FilterError;
pub use filter::filter_document;
