use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::direction::Direction;

/// Direction preferences persisted in the settings file.
///
/// Every field has a default so that older or hand-edited files still load;
/// values that cannot be understood fall back to the default for that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSet {
    /// Document path → direction chosen explicitly for that document
    #[serde(default, deserialize_with = "deserialize_file_directions")]
    pub file_directions: BTreeMap<String, Direction>,

    #[serde(default = "default_direction", deserialize_with = "deserialize_direction")]
    pub default_direction: Direction,

    #[serde(default = "default_remember_per_file")]
    pub remember_per_file: bool,

    #[serde(default = "default_note_title_direction")]
    pub set_note_title_direction: bool,

    /// Align YAML blocks in preview with the note direction
    #[serde(default)]
    pub set_yaml_direction: bool,
}

fn default_direction() -> Direction {
    Direction::Ltr
}

fn default_remember_per_file() -> bool {
    true
}

fn default_note_title_direction() -> bool {
    true
}

fn deserialize_direction<'de, D>(deserializer: D) -> Result<Direction, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value.as_str().map(str::parse::<Direction>) {
        Some(Ok(direction)) => Ok(direction),
        _ => {
            warn!(value = %value, "Unrecognized default direction, using ltr");
            Ok(default_direction())
        }
    }
}

/// Accepts a map of path → direction, dropping entries whose value is not a direction.
/// A missing or non-object value yields an empty map.
fn deserialize_file_directions<'de, D>(deserializer: D) -> Result<BTreeMap<String, Direction>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let Some(entries) = value.as_object() else {
        if !value.is_null() {
            warn!(value = %value, "fileDirections is not an object, ignoring");
        }
        return Ok(BTreeMap::new());
    };

    let mut directions = BTreeMap::new();
    for (path, raw) in entries {
        match raw.as_str().map(str::parse::<Direction>) {
            Some(Ok(direction)) => {
                directions.insert(path.clone(), direction);
            }
            _ => warn!(path = %path, value = %raw, "Dropping stored direction with unknown value"),
        }
    }
    Ok(directions)
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            file_directions: BTreeMap::new(),
            default_direction: default_direction(),
            remember_per_file: default_remember_per_file(),
            set_note_title_direction: default_note_title_direction(),
            set_yaml_direction: false,
        }
    }
}

impl PreferenceSet {
    /// Direction remembered for `path`, if per-file memory is enabled and one was stored
    pub fn remembered(&self, path: &str) -> Option<Direction> {
        if !self.remember_per_file {
            return None;
        }
        self.file_directions.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let prefs = PreferenceSet::default();
        assert!(prefs.file_directions.is_empty());
        assert_eq!(prefs.default_direction, Direction::Ltr);
        assert!(prefs.remember_per_file);
        assert!(prefs.set_note_title_direction);
        assert!(!prefs.set_yaml_direction);
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut prefs = PreferenceSet {
            default_direction: Direction::Rtl,
            set_yaml_direction: true,
            ..Default::default()
        };
        prefs.file_directions.insert("notes/A.md".to_string(), Direction::Rtl);

        let json = serde_json::to_string(&prefs).unwrap();
        let loaded: PreferenceSet = serde_json::from_str(&json).unwrap();
        assert_eq!(prefs, loaded);
    }

    #[test]
    fn test_uses_camel_case_keys() {
        let json = serde_json::to_string(&PreferenceSet::default()).unwrap();
        assert!(json.contains("\"fileDirections\""));
        assert!(json.contains("\"defaultDirection\":\"ltr\""));
        assert!(json.contains("\"rememberPerFile\":true"));
        assert!(json.contains("\"setNoteTitleDirection\":true"));
        assert!(json.contains("\"setYamlDirection\":false"));
    }

    #[test]
    fn test_partial_config() {
        // Files written before setYamlDirection existed
        let json = r#"{"fileDirections": {"A.md": "rtl"}, "defaultDirection": "rtl"}"#;
        let prefs: PreferenceSet = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.default_direction, Direction::Rtl);
        assert_eq!(prefs.file_directions.get("A.md"), Some(&Direction::Rtl));
        assert!(prefs.remember_per_file);
        assert!(!prefs.set_yaml_direction);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let json = r#"{
            "fileDirections": {"A.md": "rtl", "B.md": "sideways", "C.md": 3},
            "defaultDirection": "RTL"
        }"#;
        let prefs: PreferenceSet = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.default_direction, Direction::Ltr);
        assert_eq!(prefs.file_directions.len(), 1);
        assert_eq!(prefs.file_directions.get("A.md"), Some(&Direction::Rtl));
    }

    #[test]
    fn test_null_file_directions() {
        let json = r#"{"fileDirections": null}"#;
        let prefs: PreferenceSet = serde_json::from_str(json).unwrap();
        assert!(prefs.file_directions.is_empty());
    }

    #[test]
    fn test_remembered_respects_flag() {
        let mut prefs = PreferenceSet::default();
        prefs.file_directions.insert("A.md".to_string(), Direction::Rtl);
        assert_eq!(prefs.remembered("A.md"), Some(Direction::Rtl));
        assert_eq!(prefs.remembered("B.md"), None);

        prefs.remember_per_file = false;
        assert_eq!(prefs.remembered("A.md"), None);
    }
}
