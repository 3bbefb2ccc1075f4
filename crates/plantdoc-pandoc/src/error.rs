//! Filter error types.

use plantdoc_diagrams::DiagramError;

/// Errors produced while filtering a pandoc document.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The document root is not the expected JSON shape.
    #[error("malformed pandoc document: {0}")]
    MalformedDocument(String),

    /// Diagram materialization failed; the conversion must abort.
    #[error("{0}")]
    Diagram(#[from] DiagramError),
}
