//! Reading the `direction` key from a document's YAML front matter.

use serde_yaml::Value;
use tracing::debug;

use crate::app::infrastructure::error::Result;

/// The YAML between an opening `---` line and the next `---` (or `...`) line
fn front_matter_block(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let (first, rest) = text.split_once('\n')?;
    if first.trim_end() != "---" {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parsed front matter of `text`, or `None` when it has no front matter block
pub fn parse(text: &str) -> Result<Option<Value>> {
    let Some(block) = front_matter_block(text) else {
        return Ok(None);
    };
    Ok(Some(serde_yaml::from_str(block)?))
}

/// Raw `direction` value from the front matter of `text`.
///
/// Scalars are returned as text so the caller can decide whether they name a
/// direction. Empty, null, `false` and zero values count as absent.
pub fn direction(text: &str) -> Option<String> {
    let front_matter = match parse(text) {
        Ok(value) => value?,
        Err(e) => {
            debug!(error = %e, "Ignoring malformed front matter");
            return None;
        }
    };

    match front_matter.get("direction")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        other => serde_yaml::to_string(other).ok().map(|s| s.trim().to_string()),
    }
}
