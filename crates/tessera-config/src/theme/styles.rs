//! CSS fragment loading.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;
use tessera_common::ThemeError;

/// Style files read from a theme directory, in load order.
pub const STYLE_FILES: [&str; 3] = ["variables.css", "components.css", "custom.css"];

/// The only style file a theme cannot do without.
pub const REQUIRED_STYLE: &str = "variables.css";

/// Read the theme's CSS files into `styles`, keyed by file name.
///
/// A missing optional file is skipped. Any other I/O failure, on any
/// file, aborts the load. Invalid UTF-8 is replaced, not rejected.
pub async fn load_styles(
    theme_dir: &Path,
    styles: &mut BTreeMap<String, String>,
) -> Result<(), ThemeError> {
    for file in STYLE_FILES {
        let path = theme_dir.join(file);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let css = String::from_utf8_lossy(&bytes).into_owned();
                styles.insert(file.to_string(), css);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if file == REQUIRED_STYLE {
                    return Err(ThemeError::MissingRequiredStyle(REQUIRED_STYLE));
                }
            }
            Err(source) => return Err(ThemeError::StyleUnreadable { path, source }),
        }
    }
    Ok(())
}
