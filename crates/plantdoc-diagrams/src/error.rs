//! Diagram materialization errors.

use std::path::PathBuf;

/// Errors produced while materializing a diagram.
///
/// Nothing here is recovered internally: every failure propagates to the
/// invoking conversion pipeline, which aborts the whole document build. A
/// single bad diagram fails the document.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// The block carries the marker class but no `caption` attribute.
    #[error("diagram code block has no 'caption' attribute")]
    MissingCaption,

    /// The configured renderer command contains no tokens.
    #[error("renderer command is empty")]
    EmptyRendererCommand,

    /// The renderer executable could not be spawned.
    #[error("renderer '{command}' not found in PATH")]
    RendererNotFound {
        /// First token of the configured renderer command.
        command: String,
    },

    /// The renderer exited with a non-zero status.
    #[error("renderer failed (exit code {exit_code}): {stderr}")]
    RendererFailed {
        /// Exit code reported by the renderer (-1 if killed by a signal).
        exit_code: i32,
        /// Captured stderr output.
        stderr: String,
    },

    /// The renderer exited successfully but the expected artifact is missing.
    #[error("renderer did not produce expected artifact {}", path.display())]
    ArtifactMissing {
        /// Path the renderer was expected to write.
        path: PathBuf,
    },

    /// Filesystem error while preparing the cache directory or source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_caption() {
        assert_eq!(
            DiagramError::MissingCaption.to_string(),
            "diagram code block has no 'caption' attribute"
        );
    }

    #[test]
    fn test_error_display_renderer_failed() {
        let error = DiagramError::RendererFailed {
            exit_code: 1,
            stderr: "syntax error".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "renderer failed (exit code 1): syntax error"
        );
    }

    #[test]
    fn test_error_display_artifact_missing() {
        let error = DiagramError::ArtifactMissing {
            path: PathBuf::from("/tmp/cache/abc.svg"),
        };
        assert_eq!(
            error.to_string(),
            "renderer did not produce expected artifact /tmp/cache/abc.svg"
        );
    }

    #[test]
    fn test_error_display_renderer_not_found() {
        let error = DiagramError::RendererNotFound {
            command: "plantuml".to_owned(),
        };
        assert_eq!(error.to_string(), "renderer 'plantuml' not found in PATH");
    }
}
