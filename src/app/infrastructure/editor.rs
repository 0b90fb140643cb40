//! The host editor as seen by the direction controller.

use tracing::info;

use crate::app::domain::Direction;
use crate::app::services::presentation::{DirectionStyles, StyleSlot};

/// Editor options and page styles the controller drives.
///
/// Implemented by the host adapter around the active markdown editor.
pub trait EditorHost {
    /// Direction of the active editor, or `None` when no editor is active
    fn current_direction(&self) -> Option<Direction>;

    /// Set the editor direction; cursor movement follows the visual order
    fn set_direction(&mut self, direction: Direction);

    fn auto_close_brackets(&self) -> bool;

    fn set_auto_close_brackets(&mut self, enabled: bool);

    /// Apply preview, title and page-level styles
    fn apply_styles(&mut self, styles: &DirectionStyles);
}

/// Editor stand-in for the command-line host: keeps the options in memory
/// and reports what would be applied.
#[derive(Debug, Clone)]
pub struct ConsoleEditor {
    direction: Direction,
    auto_close_brackets: bool,
    active: bool,
    last_styles: Option<DirectionStyles>,
    /// Contents of the page's `<style>` elements
    page_styles: Vec<String>,
}

impl Default for ConsoleEditor {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            auto_close_brackets: true,
            active: false,
            last_styles: None,
            // The host stylesheet carries the print rule from the start
            page_styles: vec![format!(
                "/* {} */ @media print {{ body {{ direction: ltr; }} }}",
                StyleSlot::PrintDirection.marker()
            )],
        }
    }
}

impl ConsoleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an editor as open or closed
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn last_styles(&self) -> Option<&DirectionStyles> {
        self.last_styles.as_ref()
    }

    pub fn page_styles(&self) -> &[String] {
        &self.page_styles
    }

    /// Replace every style carrying the slot's marker, adding one if none does and the slot allows it
    fn replace_page_style(&mut self, slot: StyleSlot, css: String) {
        let marker = slot.marker();
        let mut found = false;
        for style in self.page_styles.iter_mut().filter(|style| style.contains(marker)) {
            *style = css.clone();
            found = true;
        }
        if !found && slot.add_if_missing() {
            self.page_styles.push(css);
        }
        info!(slot = ?slot, replaced = found, "Page style");
    }
}

impl EditorHost for ConsoleEditor {
    fn current_direction(&self) -> Option<Direction> {
        self.active.then_some(self.direction)
    }

    fn set_direction(&mut self, direction: Direction) {
        info!(direction = %direction, "Editor direction set");
        self.direction = direction;
    }

    fn auto_close_brackets(&self) -> bool {
        self.auto_close_brackets
    }

    fn set_auto_close_brackets(&mut self, enabled: bool) {
        self.auto_close_brackets = enabled;
    }

    fn apply_styles(&mut self, styles: &DirectionStyles) {
        info!(preview = %styles.preview(), note_title = ?styles.note_title, "Preview direction");
        for (slot, css) in styles.stylesheets() {
            self.replace_page_style(slot, css);
        }
        self.last_styles = Some(styles.clone());
    }
}
