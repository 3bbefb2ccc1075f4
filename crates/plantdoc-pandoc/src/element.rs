//! Pandoc element construction and destructuring.
//!
//! Only the shapes this filter interprets are modeled:
//!
//! ```text
//! CodeBlock: {"t": "CodeBlock", "c": [[id, [classes], [[k, v], ...]], text]}
//! Image:     {"t": "Image", "c": [[id, [classes], [[k, v], ...]], [inlines], [url, title]]}
//! ```
//!
//! Everything else in the document round-trips untouched as raw JSON.

use plantdoc_diagrams::{DiagramBlock, RenderedImage};
use serde_json::{Value, json};

/// Destructure a pandoc `CodeBlock` node into a [`DiagramBlock`].
///
/// Returns `None` when the value is not an object of the expected shape;
/// such nodes are left for the host pipeline to interpret.
#[must_use]
pub fn code_block_parts(value: &Value) -> Option<DiagramBlock> {
    let obj = value.as_object()?;
    if obj.get("t")?.as_str()? != "CodeBlock" {
        return None;
    }

    let [attr, text] = obj.get("c")?.as_array()?.as_slice() else {
        return None;
    };
    let text = text.as_str()?;

    let [identifier, classes, pairs] = attr.as_array()?.as_slice() else {
        return None;
    };
    let identifier = identifier.as_str()?;
    let classes = classes
        .as_array()?
        .iter()
        .map(|class| class.as_str().map(str::to_owned))
        .collect::<Option<Vec<_>>>()?;
    let attributes = pairs
        .as_array()?
        .iter()
        .map(|pair| {
            let [key, value] = pair.as_array()?.as_slice() else {
                return None;
            };
            Some((key.as_str()?.to_owned(), value.as_str()?.to_owned()))
        })
        .collect::<Option<Vec<_>>>()?;

    Some(DiagramBlock {
        text: text.to_owned(),
        classes,
        attributes,
        identifier: identifier.to_owned(),
    })
}

/// Build the replacement node: a paragraph holding a single image.
///
/// Alt text is the caption, the URL points at the rendered artifact, and the
/// identifier and attribute pairs are carried over from the code block. The
/// image classes are left empty; pandoc renders the `fig:` title as a
/// numbered figure.
#[must_use]
pub fn image_paragraph(image: &RenderedImage) -> Value {
    let attributes: Vec<Value> = image
        .attributes
        .iter()
        .map(|(key, value)| json!([key, value]))
        .collect();

    json!({
        "t": "Para",
        "c": [{
            "t": "Image",
            "c": [
                [image.identifier, [], attributes],
                [{"t": "Str", "c": image.alt_text}],
                [image.url.to_string_lossy(), image.title],
            ],
        }],
    })
}
