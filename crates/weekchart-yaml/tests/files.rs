//! File-based loading tests.

use std::io::Write;
use weekchart_yaml::{load_entries, load_style, ConfigError};

fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("weekchart-yaml-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    path
}

#[test]
fn test_load_style_file() {
    let path = temp_file("style.yaml", "left_panel_width: 120\ntop_margin: 40\n");
    let style = load_style(&path).unwrap();
    assert_eq!(style.left_panel_width, 120.0);
    assert_eq!(style.top_margin, 40.0);
}

#[test]
fn test_load_entries_file() {
    let path = temp_file(
        "entries.yaml",
        "- { x_index: 0, y_value: 10 }\n- { x_index: 1, y_value: 8 }\n",
    );
    let entries = load_entries(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].y_value, 10.0);
}

#[test]
fn test_load_invalid_style_file() {
    let path = temp_file("bad.yaml", "grid: { dash: [8] }\n");
    match load_style(&path) {
        Err(ConfigError::Invalid(invalid)) => assert_eq!(invalid.field, "grid.dash"),
        other => panic!("Expected Invalid, got {other:?}"),
    }
}
