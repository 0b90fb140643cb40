//! What a direction means for presentation: page styles and Home/End motion.

use crate::app::domain::{Direction, PreferenceSet};

/// Page-level style slots the host keeps as `<style>` elements.
/// Each slot is located by its marker and replaced in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleSlot {
    /// Keeps wrapped list lines from being indented in rtl editors
    ListIndent,
    YamlAlign,
    PrintDirection,
}

impl StyleSlot {
    pub fn marker(&self) -> &'static str {
        match self {
            Self::ListIndent => "CodeMirror-rtl pre",
            Self::YamlAlign => "rtl-direction: yaml",
            Self::PrintDirection => "rtl-direction: print",
        }
    }

    /// Whether the host should create the style when no element carries the marker.
    /// The print style ships with the host's stylesheet and is only ever replaced.
    pub fn add_if_missing(&self) -> bool {
        !matches!(self, Self::PrintDirection)
    }
}

/// Everything outside the editor itself that follows the note direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionStyles {
    pub direction: Direction,
    /// Set when the note title should follow the note direction
    pub note_title: Option<Direction>,
    /// Set when YAML blocks in preview should be aligned with the note
    pub yaml_align: Option<&'static str>,
}

impl DirectionStyles {
    pub fn new(direction: Direction, prefs: &PreferenceSet) -> Self {
        Self {
            direction,
            note_title: prefs.set_note_title_direction.then_some(direction),
            yaml_align: prefs.set_yaml_direction.then(|| direction.align_side()),
        }
    }

    /// Direction for the rendered preview container
    pub fn preview(&self) -> Direction {
        self.direction
    }

    /// Stylesheet text for every slot that applies
    pub fn stylesheets(&self) -> Vec<(StyleSlot, String)> {
        let mut sheets = vec![(
            StyleSlot::ListIndent,
            ".CodeMirror-rtl pre { text-indent: 0px !important; }".to_string(),
        )];
        if let Some(side) = self.yaml_align {
            sheets.push((
                StyleSlot::YamlAlign,
                format!("/* rtl-direction: yaml */ .language-yml code {{ text-align: {}; }}", side),
            ));
        }
        sheets.push((
            StyleSlot::PrintDirection,
            format!(
                "/* rtl-direction: print */ @media print {{ body {{ direction: {}; }} }}",
                self.direction
            ),
        ));
        sheets
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKey {
    Home,
    End,
}

/// Editor cursor commands bound to Home/End
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMotion {
    /// Visual line start, skipping leading whitespace
    LineLeftSmart,
    LineRight,
}

/// Home/End follow the visual line ends, so they swap in rtl.
/// Both keys land on the smart line start when it is on the left.
pub fn line_motion(key: LineKey, direction: Direction) -> LineMotion {
    match (key, direction) {
        (LineKey::End, Direction::Ltr) | (LineKey::Home, Direction::Rtl) => LineMotion::LineRight,
        (LineKey::Home, Direction::Ltr) | (LineKey::End, Direction::Rtl) => LineMotion::LineLeftSmart,
    }
}
