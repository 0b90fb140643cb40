use serde::Deserialize;

use super::direction::Direction;

/// Edits coming from the host's settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingChange {
    RememberPerFile(bool),
    DefaultDirection(Direction),
    NoteTitleDirection(bool),
    YamlDirection(bool),
}

/// All events the host can deliver to the direction controller.
/// The host adapter translates its own callbacks into these; the controller handles them one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Document lifecycle
    DocumentOpened {
        path: String,
        /// Raw `direction` value from the document's front matter, if any
        front_matter_direction: Option<String>,
    },
    DocumentRenamed {
        old_path: String,
        new_path: String,
    },
    DocumentDeleted {
        path: String,
    },

    // User command
    ToggleDirection,

    // Settings
    SettingChanged(SettingChange),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_change_deserialization() {
        let change: SettingChange = serde_json::from_str(r#"{"default_direction": "rtl"}"#).unwrap();
        assert_eq!(change, SettingChange::DefaultDirection(Direction::Rtl));

        let change: SettingChange = serde_json::from_str(r#"{"remember_per_file": false}"#).unwrap();
        assert_eq!(change, SettingChange::RememberPerFile(false));
    }

    #[test]
    fn test_setting_change_rejects_unknown_direction() {
        assert!(serde_json::from_str::<SettingChange>(r#"{"default_direction": "up"}"#).is_err());
    }
}
