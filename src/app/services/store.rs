//! Owner of the preference set and everything that mutates it.
//!
//! Every mutation schedules a save through the backend before returning, so a
//! rename or delete is persisted in the same turn as the event that caused it.

use tracing::{debug, info, warn};

use crate::app::domain::{Direction, PreferenceSet, SettingChange};
use crate::app::infrastructure::backend::PersistenceBackend;

pub struct PreferenceStore<B: PersistenceBackend> {
    prefs: PreferenceSet,
    backend: B,
}

impl<B: PersistenceBackend> PreferenceStore<B> {
    /// Store holding the default preferences; call `load` to pick up the saved ones
    pub fn new(backend: B) -> Self {
        Self {
            prefs: PreferenceSet::default(),
            backend,
        }
    }

    pub fn preferences(&self) -> &PreferenceSet {
        &self.prefs
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the in-memory preferences with the stored ones.
    ///
    /// A missing or unreadable file leaves the current preferences untouched.
    /// Returns whether stored preferences were applied.
    pub fn load(&mut self) -> bool {
        let content = match self.backend.read() {
            Ok(content) => content,
            Err(e) => {
                info!(error = %e, "Direction settings not found, using defaults");
                return false;
            }
        };

        match serde_json::from_str::<PreferenceSet>(&content) {
            Ok(prefs) => {
                info!(files = prefs.file_directions.len(), default_direction = %prefs.default_direction, "Loaded direction settings");
                self.prefs = prefs;
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse direction settings, using defaults");
                false
            }
        }
    }

    /// Hand the current preferences to the backend without waiting for the write
    pub fn save(&self) {
        match serde_json::to_string_pretty(&self.prefs) {
            Ok(json) => self.backend.write(json),
            Err(e) => warn!(error = %e, "Failed to serialize direction settings"),
        }
    }

    /// Remember `direction` for `path`. Does nothing unless per-file memory is on.
    pub fn record_direction(&mut self, path: &str, direction: Direction) {
        if !self.prefs.remember_per_file {
            return;
        }
        self.prefs.file_directions.insert(path.to_string(), direction);
        debug!(path = %path, direction = %direction, "Recorded file direction");
        self.save();
    }

    pub fn on_delete(&mut self, path: &str) {
        if self.prefs.file_directions.remove(path).is_some() {
            debug!(path = %path, "Forgot direction of deleted file");
            self.save();
        }
    }

    /// Move the remembered direction of `old_path` to `new_path`.
    pub fn on_rename(&mut self, old_path: &str, new_path: &str) {
        if let Some(direction) = self.prefs.file_directions.remove(old_path) {
            self.prefs.file_directions.insert(new_path.to_string(), direction);
            debug!(old_path = %old_path, new_path = %new_path, "Moved file direction");
            self.save();
        }
    }

    pub fn apply_setting(&mut self, change: SettingChange) {
        match change {
            SettingChange::RememberPerFile(value) => self.prefs.remember_per_file = value,
            SettingChange::DefaultDirection(direction) => self.prefs.default_direction = direction,
            SettingChange::NoteTitleDirection(value) => self.prefs.set_note_title_direction = value,
            SettingChange::YamlDirection(value) => self.prefs.set_yaml_direction = value,
        }
        info!(change = ?change, "Direction setting changed");
        self.save();
    }
}
