use tracing::warn;

use crate::app::domain::{Direction, PreferenceSet};

/// Effective direction for a document.
///
/// Priority: front matter (`ltr`/`rtl` only) > remembered per-file direction > default.
/// An unknown front matter value is logged and ignored.
pub fn resolve(path: &str, front_matter_direction: Option<&str>, prefs: &PreferenceSet) -> Direction {
    if let Some(raw) = front_matter_direction {
        match raw.parse::<Direction>() {
            Ok(direction) => return direction,
            Err(_) => warn!(path = %path, value = %raw, "Unknown front matter direction, ignoring"),
        }
    }

    prefs.remembered(path).unwrap_or(prefs.default_direction)
}
