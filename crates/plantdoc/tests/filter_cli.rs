//! End-to-end tests for the plantdoc binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};

fn plantdoc() -> Command {
    let mut cmd = Command::cargo_bin("plantdoc").unwrap();
    // Isolate from the invoking environment
    cmd.env_remove("PLANTUML_BIN").env_remove("PLANTDOC_CACHE_DIR");
    cmd
}

#[test]
fn passes_through_documents_without_diagrams() {
    let doc = json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {},
        "blocks": [
            {"t": "Para", "c": [{"t": "Str", "c": "hello"}]},
            {"t": "CodeBlock", "c": [["", ["rust"], []], "fn main() {}"]},
        ],
    });

    let assert = plantdoc()
        .arg("html")
        .write_stdin(doc.to_string())
        .assert()
        .success();

    let transformed: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(transformed, doc);
}

#[test]
fn rejects_invalid_json() {
    plantdoc()
        .arg("html")
        .write_stdin("this is not a pandoc document")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn missing_caption_fails_the_conversion() {
    let doc = json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {},
        "blocks": [
            {"t": "CodeBlock", "c": [["", ["plantuml"], []], "A -> B"]},
        ],
    });

    plantdoc()
        .arg("html")
        .write_stdin(doc.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("caption"));
}

#[cfg(unix)]
#[test]
fn renders_diagram_with_configured_renderer() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = tmp.path().join("fake-plantuml.sh");
    std::fs::write(
        &script,
        "#!/bin/sh\next=${1#-t}\nout=\"${2%.uml}.$ext\"\ncp \"$2\" \"$out\"\n",
    )
    .unwrap();

    let doc = json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {},
        "blocks": [
            {"t": "CodeBlock", "c": [
                ["fig1", ["plantuml"], [["caption", "seq"]]],
                "A -> B",
            ]},
        ],
    });

    let assert = plantdoc()
        .arg("html")
        .env("PLANTUML_BIN", format!("sh {}", script.display()))
        .env("PLANTDOC_CACHE_DIR", tmp.path().join("cache"))
        .write_stdin(doc.to_string())
        .assert()
        .success();

    let transformed: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let image = &transformed["blocks"][0]["c"][0];
    assert_eq!(image["t"], "Image");
    assert_eq!(image["c"][0][0], "fig1");
    assert_eq!(image["c"][1][0]["c"], "seq");
    assert_eq!(image["c"][2][1], "fig:");
    assert!(image["c"][2][0].as_str().unwrap().ends_with(".svg"));
}

#[cfg(unix)]
#[test]
fn renderer_failure_aborts_with_nonzero_exit() {
    let tmp = tempfile::TempDir::new().unwrap();
    let script = tmp.path().join("fail.sh");
    std::fs::write(&script, "#!/bin/sh\necho 'syntax error' >&2\nexit 1\n").unwrap();

    let doc = json!({
        "pandoc-api-version": [1, 23, 1],
        "meta": {},
        "blocks": [
            {"t": "CodeBlock", "c": [
                ["", ["plantuml"], [["caption", "seq"]]],
                "A -> B",
            ]},
        ],
    });

    plantdoc()
        .arg("html")
        .env("PLANTUML_BIN", format!("sh {}", script.display()))
        .env("PLANTDOC_CACHE_DIR", tmp.path().join("cache"))
        .write_stdin(doc.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 1"));
}
