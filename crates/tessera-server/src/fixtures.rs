//! Theme directories for middleware and route tests.

use std::path::Path;

pub(crate) fn write_theme(root: &Path, name: &str, version: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("theme.json"),
        format!(
            r##"{{
    "name": "{name}",
    "displayName": "{name}",
    "version": "{version}",
    "variables": {{
        "--background-color": "#000000",
        "--foreground-color": "#eeeeee",
        "--highlight-color": "#ff9500",
        "--border-color": "#333333",
        "--cell-background-color": "#111111"
    }}
}}"##
        ),
    )
    .unwrap();
    std::fs::write(dir.join("variables.css"), format!(":root {{ --theme: {name}; }}")).unwrap();
}

/// A themes root with enabled `default` and `acme` themes.
pub(crate) fn themes_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("theme-registry.json"),
        r#"{"themes": {"default": {"status": "active"}, "acme": {"status": "active"}}}"#,
    )
    .unwrap();
    write_theme(dir.path(), "default", "1.0.0");
    write_theme(dir.path(), "acme", "2.0.0");
    dir
}
