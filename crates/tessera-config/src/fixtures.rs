//! On-disk theme fixtures shared by the unit tests.

use std::path::Path;

pub(crate) fn descriptor(name: &str, version: &str) -> String {
    format!(
        r##"{{
    "name": "{name}",
    "displayName": "{name} theme",
    "version": "{version}",
    "author": "Tessera",
    "keywords": ["light", "minimal"],
    "variables": {{
        "--background-color": "#ffffff",
        "--foreground-color": "#111111",
        "--highlight-color": "#0a84ff",
        "--border-color": "#dddddd",
        "--cell-background-color": "#f7f7f7"
    }},
    "features": {{"darkMode": false, "animations": true}}
}}"##
    )
}

pub(crate) fn write_registry(root: &Path, json: &str) {
    std::fs::write(root.join(crate::REGISTRY_FILE), json).unwrap();
}

/// Write `theme.json` plus the given style files into `root/dir`.
pub(crate) fn write_theme(root: &Path, dir: &str, descriptor: &str, styles: &[(&str, &str)]) {
    let theme_dir = root.join(dir);
    std::fs::create_dir_all(&theme_dir).unwrap();
    std::fs::write(theme_dir.join("theme.json"), descriptor).unwrap();
    for (file, css) in styles {
        std::fs::write(theme_dir.join(file), css).unwrap();
    }
}

/// A complete, valid theme with all three style files.
pub(crate) fn write_valid_theme(root: &Path, name: &str, version: &str) {
    write_theme(
        root,
        name,
        &descriptor(name, version),
        &[
            ("variables.css", ":root { --background-color: #ffffff; }"),
            ("components.css", ".cell { border: 1px solid var(--border-color); }"),
            ("custom.css", "body { margin: 0; }"),
        ],
    );
}
