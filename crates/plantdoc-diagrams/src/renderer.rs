//! External PlantUML renderer invocation.
//!
//! The renderer is an opaque subprocess. Its external contract: given
//! `<command tokens...> -t<ext> <file>.uml`, it writes `<file>.<ext>` beside
//! the input file and exits non-zero on failure. Artifact existence is
//! verified by the caller, not here.

use std::path::Path;
use std::process::Command;

use crate::error::DiagramError;
use crate::format::ImageFormat;

/// Invoke the renderer on a `.uml` source file.
///
/// `command` is split on whitespace; the first token is the executable and
/// the rest become leading arguments, so a multi-token command line such as
/// `java -jar plantuml.jar` works.
///
/// Blocks until the subprocess exits. There is no timeout: a hung renderer
/// hangs the whole conversion.
#[tracing::instrument]
pub(crate) fn run_renderer(
    command: &str,
    source_path: &Path,
    format: ImageFormat,
) -> Result<(), DiagramError> {
    let mut tokens = command.split_whitespace();
    let program = tokens.next().ok_or(DiagramError::EmptyRendererCommand)?;

    let output = Command::new(program)
        .args(tokens)
        .arg(format!("-t{}", format.extension()))
        .arg(source_path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiagramError::RendererNotFound {
                    command: program.to_owned(),
                }
            } else {
                DiagramError::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code().unwrap_or(-1);
        tracing::error!(exit_code, stderr = %stderr, "renderer failed");
        return Err(DiagramError::RendererFailed { exit_code, stderr });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command() {
        let result = run_renderer("", Path::new("/tmp/x.uml"), ImageFormat::Svg);
        assert!(matches!(result, Err(DiagramError::EmptyRendererCommand)));

        let result = run_renderer("   ", Path::new("/tmp/x.uml"), ImageFormat::Svg);
        assert!(matches!(result, Err(DiagramError::EmptyRendererCommand)));
    }

    #[test]
    fn test_renderer_not_found() {
        let result = run_renderer(
            "definitely-not-a-real-renderer-binary",
            Path::new("/tmp/x.uml"),
            ImageFormat::Svg,
        );
        assert!(matches!(
            result,
            Err(DiagramError::RendererNotFound { command }) if command == "definitely-not-a-real-renderer-binary"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_success() {
        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("ok.sh");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();

        let command = format!("sh {}", script.display());
        let source = tmp.path().join("x.uml");
        std::fs::write(&source, "@startuml\n@enduml\n").unwrap();

        run_renderer(&command, &source, ImageFormat::Svg).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_failure_captures_stderr() {
        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("fail.sh");
        std::fs::write(&script, "#!/bin/sh\necho 'bad diagram' >&2\nexit 1\n").unwrap();

        let command = format!("sh {}", script.display());
        let result = run_renderer(&command, Path::new("/tmp/x.uml"), ImageFormat::Svg);

        match result {
            Err(DiagramError::RendererFailed { exit_code, stderr }) => {
                assert_eq!(exit_code, 1);
                assert!(stderr.contains("bad diagram"));
            }
            other => panic!("expected RendererFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_receives_format_flag_and_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("record.sh");
        let log = tmp.path().join("args.log");
        std::fs::write(&script, format!("#!/bin/sh\necho \"$@\" > {}\n", log.display())).unwrap();

        let command = format!("sh {}", script.display());
        let source = tmp.path().join("x.uml");
        std::fs::write(&source, "").unwrap();

        run_renderer(&command, &source, ImageFormat::Png).unwrap();

        let recorded = std::fs::read_to_string(&log).unwrap();
        assert_eq!(recorded.trim(), format!("-tpng {}", source.display()));
    }
}
