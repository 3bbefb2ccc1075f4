//! Recursive pandoc document walk.

use plantdoc_diagrams::Materializer;
use serde_json::Value;

use crate::element::{code_block_parts, image_paragraph};
use crate::error::FilterError;

/// Walk a pandoc document and replace PlantUML code blocks with rendered
/// images.
///
/// The walk visits every node in document order, metadata included. Code
/// blocks without the diagram marker are left untouched. The first
/// materialization error aborts the walk; the document may then be partially
/// transformed and must be discarded by the caller.
pub fn filter_document(
    doc: &mut Value,
    materializer: &Materializer,
    format_hint: Option<&str>,
) -> Result<(), FilterError> {
    if !doc.is_object() {
        return Err(FilterError::MalformedDocument(
            "expected a JSON object at the document root".to_owned(),
        ));
    }

    let mut replaced = 0usize;
    walk(doc, materializer, format_hint, &mut replaced)?;
    tracing::debug!(replaced, "document walk finished");
    Ok(())
}

fn walk(
    value: &mut Value,
    materializer: &Materializer,
    format_hint: Option<&str>,
    replaced: &mut usize,
) -> Result<(), FilterError> {
    if let Some(block) = code_block_parts(value) {
        if let Some(image) = materializer.materialize(&block, format_hint)? {
            *value = image_paragraph(&image);
            *replaced += 1;
        }
        // Code blocks have no children to visit
        return Ok(());
    }

    match value {
        Value::Array(items) => {
            for item in items {
                walk(item, materializer, format_hint, replaced)?;
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                walk(item, materializer, format_hint, replaced)?;
            }
        }
        _ => {}
    }
    Ok(())
}
