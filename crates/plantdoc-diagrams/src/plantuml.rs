//! PlantUML source normalization.

use crate::consts::START_PREFIX;

/// Wrap bare diagram text in `@startuml`/`@enduml` markers.
///
/// Source that already opens with an `@start` directive (any variant, e.g.
/// `@startuml`, `@startmindmap`) is used verbatim.
#[must_use]
pub fn wrap_source(source: &str) -> String {
    if source.starts_with(START_PREFIX) {
        source.to_owned()
    } else {
        format!("@startuml\n{source}\n@enduml\n")
    }
}
