//! Internal constants for diagram materialization.

/// Class that marks a fenced code block as PlantUML diagram source.
pub const MARKER_CLASS: &str = "plantuml";

/// Attribute holding the human-readable figure caption.
pub const CAPTION_ATTR: &str = "caption";

/// Cache directory name under the system temp root.
pub const CACHE_DIR_NAME: &str = "pandoc_plantuml";

/// Default renderer command when none is configured.
pub const DEFAULT_RENDERER: &str = "plantuml";

/// Title sentinel the host rendering pipeline interprets as a numbered figure.
pub const FIGURE_TITLE: &str = "fig:";

/// Prefix identifying source that already carries its own `@start` block.
pub const START_PREFIX: &str = "@start";
