//! Line-delimited JSON events read by the command-line host.
//!
//! `{"event":"open","path":"notes/A.md"}`, `{"event":"rename","old_path":"A.md","new_path":"B.md"}`,
//! `{"event":"delete","path":"B.md"}`, `{"event":"toggle"}`,
//! `{"event":"setting","change":{"default_direction":"rtl"}}`

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::error::Result;
use crate::app::domain::{Message, SettingChange};
use crate::app::services::front_matter;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Open { path: String },
    Rename { old_path: String, new_path: String },
    Delete { path: String },
    Toggle,
    Setting { change: SettingChange },
}

impl HostEvent {
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Translate into a controller message. Opening a document reads its
    /// front matter from `vault`; an unreadable file has no front matter.
    pub fn into_message(self, vault: &Path) -> Message {
        match self {
            Self::Open { path } => {
                let front_matter_direction = read_front_matter_direction(vault, &path);
                Message::DocumentOpened {
                    path,
                    front_matter_direction,
                }
            }
            Self::Rename { old_path, new_path } => Message::DocumentRenamed { old_path, new_path },
            Self::Delete { path } => Message::DocumentDeleted { path },
            Self::Toggle => Message::ToggleDirection,
            Self::Setting { change } => Message::SettingChanged(change),
        }
    }
}

fn read_front_matter_direction(vault: &Path, path: &str) -> Option<String> {
    match fs::read_to_string(vault.join(path)) {
        Ok(text) => front_matter::direction(&text),
        Err(e) => {
            debug!(path = %path, error = %e, "Could not read document for front matter");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Direction;

    #[test]
    fn test_parse_events() {
        assert_eq!(
            HostEvent::parse(r#"{"event":"open","path":"A.md"}"#).unwrap(),
            HostEvent::Open { path: "A.md".to_string() }
        );
        assert_eq!(HostEvent::parse(r#"{"event":"toggle"}"#).unwrap(), HostEvent::Toggle);
        assert_eq!(
            HostEvent::parse(r#"{"event":"setting","change":{"yaml_direction":true}}"#).unwrap(),
            HostEvent::Setting { change: SettingChange::YamlDirection(true) }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(HostEvent::parse("toggle").is_err());
        assert!(HostEvent::parse(r#"{"event":"explode"}"#).is_err());
        assert!(HostEvent::parse(r#"{"event":"open"}"#).is_err());
    }

    #[test]
    fn test_open_reads_front_matter() {
        let vault = tempfile::tempdir().unwrap();
        fs::write(vault.path().join("A.md"), "---\ndirection: rtl\n---\nשלום\n").unwrap();

        let message = HostEvent::Open { path: "A.md".to_string() }.into_message(vault.path());
        assert_eq!(
            message,
            Message::DocumentOpened {
                path: "A.md".to_string(),
                front_matter_direction: Some("rtl".to_string()),
            }
        );
    }

    #[test]
    fn test_open_missing_file() {
        let vault = tempfile::tempdir().unwrap();
        let message = HostEvent::Open { path: "missing.md".to_string() }.into_message(vault.path());
        assert_eq!(
            message,
            Message::DocumentOpened {
                path: "missing.md".to_string(),
                front_matter_direction: None,
            }
        );
    }

    #[test]
    fn test_other_events_map_directly() {
        let vault = Path::new(".");
        assert_eq!(HostEvent::Toggle.into_message(vault), Message::ToggleDirection);
        assert_eq!(
            HostEvent::Setting { change: SettingChange::DefaultDirection(Direction::Rtl) }.into_message(vault),
            Message::SettingChanged(SettingChange::DefaultDirection(Direction::Rtl))
        );
        assert_eq!(
            HostEvent::Delete { path: "B.md".to_string() }.into_message(vault),
            Message::DocumentDeleted { path: "B.md".to_string() }
        );
    }
}
