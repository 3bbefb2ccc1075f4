//! Output format selection policy.
//!
//! The host output format (e.g. `docx`, `html`) decides the artifact format:
//! `docx` cannot embed SVG, so it gets PNG; everything else gets SVG.

use std::collections::HashMap;

/// Rendered image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// SVG output (default, scales cleanly in HTML-like targets).
    #[default]
    Svg,
    /// PNG output (for targets that cannot embed SVG).
    Png,
}

impl ImageFormat {
    /// File extension for this format, also the renderer's `-t` flag value.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Hint-to-format lookup with a default.
///
/// The stock policy maps `docx` to PNG and everything else (including an
/// absent hint) to SVG. The table is an ordinary map, so further hints can
/// be registered without touching the resolution logic.
#[derive(Debug, Clone)]
pub struct FormatPolicy {
    default: ImageFormat,
    overrides: HashMap<String, ImageFormat>,
}

impl FormatPolicy {
    /// Create a policy that resolves every hint to `default`.
    #[must_use]
    pub fn new(default: ImageFormat) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Register an override for a specific format hint.
    #[must_use]
    pub fn with_override(mut self, hint: impl Into<String>, format: ImageFormat) -> Self {
        self.overrides.insert(hint.into(), format);
        self
    }

    /// Resolve the output format for a host format hint.
    #[must_use]
    pub fn resolve(&self, hint: Option<&str>) -> ImageFormat {
        hint.and_then(|h| self.overrides.get(h).copied())
            .unwrap_or(self.default)
    }
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self::new(ImageFormat::Svg).with_override("docx", ImageFormat::Png)
    }
}
