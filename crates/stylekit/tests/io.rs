use std::fs;

use stylekit::{CssError, SelectorContainer, Stylesheet};
use tempfile::tempdir;

#[test]
fn test_parse_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.css");
    fs::write(&path, "/* Reset */\nhtml { margin: 0; }\n").unwrap();

    let sheet = Stylesheet::parse_file(&path).unwrap();
    assert_eq!(sheet.comments()[0].text(), "Reset");
    assert_eq!(sheet.selector("html").unwrap().property("margin"), Some("0"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.css");

    match Stylesheet::parse_file(&path) {
        Err(CssError::FileNotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_directory_is_an_io_error() {
    let dir = tempdir().unwrap();

    assert!(matches!(
        Stylesheet::parse_file(dir.path()),
        Err(CssError::Io(_))
    ));
}

#[test]
fn test_latin1_file_is_read_lossily() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("legacy.css");
    let mut bytes = b"/* Caf".to_vec();
    bytes.push(0xe9);
    bytes.extend_from_slice(b" */\nbody { font-family: Arial; }\n");
    fs::write(&path, bytes).unwrap();

    let sheet = Stylesheet::parse_file(&path).unwrap();
    assert_eq!(sheet.comments()[0].text(), "Caf\u{fffd}");
    assert_eq!(
        sheet.selector("body").unwrap().property("font-family"),
        Some("Arial")
    );
}

#[test]
fn test_parse_css_file_appends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("extra.css");
    fs::write(&path, "b { y: 2; }").unwrap();

    let mut sheet = Stylesheet::parse_str("a { x: 1; }");
    sheet.parse_css_file(&path).unwrap();
    assert_eq!(sheet.len(), 2);
}

#[test]
fn test_write_then_read_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.css");

    let sheet = Stylesheet::parse_str(
        "html { margin: 0; }\n@media print { .nav { display: none; } }",
    );
    sheet.write_to_file(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, sheet.render());

    let reread = Stylesheet::parse_file(&path).unwrap();
    assert_eq!(reread.selector("html"), sheet.selector("html"));
    assert_eq!(reread.all_media(), sheet.all_media());
}

#[test]
fn test_write_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.css");

    let err = Stylesheet::new().write_to_file(&path).unwrap_err();
    match err {
        CssError::WriteFailure { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected WriteFailure, got {other:?}"),
    }
}
