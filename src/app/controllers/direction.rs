use tracing::debug;

use crate::app::domain::{Direction, Message, SettingChange};
use crate::app::infrastructure::backend::PersistenceBackend;
use crate::app::infrastructure::editor::EditorHost;
use crate::app::services::presentation::{DirectionStyles, LineKey, LineMotion, line_motion};
use crate::app::services::resolver::resolve;
use crate::app::services::store::PreferenceStore;

/// The document currently shown in the editor
#[derive(Debug, Clone, PartialEq)]
struct OpenDocument {
    path: String,
    front_matter_direction: Option<String>,
}

/// Keeps the editor direction in line with the preferences of the open document.
pub struct DirectionController<B: PersistenceBackend, H: EditorHost> {
    store: PreferenceStore<B>,
    editor: H,
    current: Option<OpenDocument>,
    /// Auto-close-brackets value from before the editor last switched to rtl
    auto_close_snapshot: bool,
}

impl<B: PersistenceBackend, H: EditorHost> DirectionController<B, H> {
    pub fn new(store: PreferenceStore<B>, editor: H) -> Self {
        Self {
            store,
            editor,
            current: None,
            auto_close_snapshot: false,
        }
    }

    pub fn store(&self) -> &PreferenceStore<B> {
        &self.store
    }

    pub fn editor(&self) -> &H {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut H {
        &mut self.editor
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current.as_ref().map(|doc| doc.path.as_str())
    }

    /// Dispatch one host event. Returns the direction applied, if any.
    pub fn handle(&mut self, message: Message) -> Option<Direction> {
        match message {
            Message::DocumentOpened {
                path,
                front_matter_direction,
            } => self.open_document(path, front_matter_direction),
            Message::DocumentRenamed { old_path, new_path } => {
                self.rename_document(&old_path, &new_path);
                None
            }
            Message::DocumentDeleted { path } => {
                self.delete_document(&path);
                None
            }
            Message::ToggleDirection => self.toggle(),
            Message::SettingChanged(change) => self.change_setting(change),
        }
    }

    pub fn open_document(&mut self, path: String, front_matter_direction: Option<String>) -> Option<Direction> {
        self.current = Some(OpenDocument {
            path,
            front_matter_direction,
        });
        self.adjust_to_current()
    }

    /// Resolve and apply the direction of the current document
    pub fn adjust_to_current(&mut self) -> Option<Direction> {
        let doc = self.current.as_ref()?;
        let direction = resolve(
            &doc.path,
            doc.front_matter_direction.as_deref(),
            self.store.preferences(),
        );
        self.apply_direction(direction)
    }

    pub fn rename_document(&mut self, old_path: &str, new_path: &str) {
        self.store.on_rename(old_path, new_path);
        if let Some(doc) = self.current.as_mut().filter(|doc| doc.path == old_path) {
            doc.path = new_path.to_string();
        }
    }

    pub fn delete_document(&mut self, path: &str) {
        self.store.on_delete(path);
        if self.current_path() == Some(path) {
            self.current = None;
        }
    }

    /// Flip the direction of the active editor and remember it for the current document.
    /// Does nothing when no editor is active.
    pub fn toggle(&mut self) -> Option<Direction> {
        let Some(current) = self.editor.current_direction() else {
            debug!("Toggle ignored, no active editor");
            return None;
        };
        let direction = current.opposite();
        self.apply_direction(direction);

        if let Some(doc) = &self.current {
            self.store.record_direction(&doc.path, direction);
        }
        Some(direction)
    }

    pub fn change_setting(&mut self, change: SettingChange) -> Option<Direction> {
        self.store.apply_setting(change);
        self.adjust_to_current()
    }

    /// Apply `direction` to the active editor and page styles.
    /// Returns `None` when there is no active editor.
    pub fn apply_direction(&mut self, direction: Direction) -> Option<Direction> {
        let current = self.editor.current_direction()?;
        if current != direction {
            self.patch_auto_close_brackets(direction);
            self.editor.set_direction(direction);
        }

        let styles = DirectionStyles::new(direction, self.store.preferences());
        self.editor.apply_styles(&styles);
        Some(direction)
    }

    /// Auto-close brackets misbehaves in rtl editors: switch it off while in
    /// rtl and restore the previous value when going back to ltr.
    fn patch_auto_close_brackets(&mut self, direction: Direction) {
        if direction.is_rtl() {
            self.auto_close_snapshot = self.editor.auto_close_brackets();
            self.editor.set_auto_close_brackets(false);
        } else {
            self.editor.set_auto_close_brackets(self.auto_close_snapshot);
        }
    }

    /// Cursor command for Home/End in the active editor
    pub fn line_motion(&self, key: LineKey) -> Option<LineMotion> {
        self.editor.current_direction().map(|direction| line_motion(key, direction))
    }
}
