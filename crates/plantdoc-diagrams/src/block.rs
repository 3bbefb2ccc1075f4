//! Diagram source extracted from a fenced code block.
//!
//! Provides [`DiagramBlock`], the explicit input struct handed to the
//! [`Materializer`](crate::Materializer) by the host document tree walk.

use crate::consts::{CAPTION_ATTR, MARKER_CLASS};
use crate::error::DiagramError;

/// A fenced code block as supplied by the host document tree.
///
/// Attributes are kept as ordered pairs so the replacement image element can
/// carry them through unchanged.
#[derive(Debug, Clone, Default)]
pub struct DiagramBlock {
    /// Raw text content of the code block, treated as opaque bytes for
    /// hashing and as diagram-description text for rendering.
    pub text: String,
    /// Classification classes from the fence info.
    pub classes: Vec<String>,
    /// Free-form key/value attributes.
    pub attributes: Vec<(String, String)>,
    /// Element identifier, empty when the block has none.
    pub identifier: String,
}

impl DiagramBlock {
    /// Whether this block carries the PlantUML marker class.
    #[must_use]
    pub fn is_diagram(&self) -> bool {
        self.classes.iter().any(|c| c == MARKER_CLASS)
    }

    /// The required `caption` attribute.
    ///
    /// A diagram block without a caption is an input error, not a
    /// recoverable condition.
    pub fn caption(&self) -> Result<&str, DiagramError> {
        self.attributes
            .iter()
            .find(|(key, _)| key == CAPTION_ATTR)
            .map(|(_, value)| value.as_str())
            .ok_or(DiagramError::MissingCaption)
    }
}
