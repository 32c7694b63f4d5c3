use crate::model::Status;
use linotype::{rgb_to_ansi256, Color};
use once_cell::sync::Lazy;

/// Named colors for every styled element the printer emits.
///
/// A palette is plain data; the printer takes one at construction and a
/// process-wide default exists for the common case. Unknown statuses have no
/// entry on purpose: [`Palette::status`] returns `None` and the printer falls
/// back to unstyled text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub key: Color,
    pub open: (Color, Color),
    pub in_progress: (Color, Color),
    pub resolved: (Color, Color),
    pub closed: (Color, Color),
    pub assigned_to_me: (Color, Color),
    pub headline: (Color, Color),
    /// The `^` and `@` sigils in front of parent/assignee references.
    pub sigil: Color,
    /// Parent keys and assignee names.
    pub reference: Color,
    pub subtask_count: Color,
    pub bar_done: Color,
    pub bar_midway: Color,
}

impl Palette {
    /// Foreground/background pair for a status, `None` for statuses outside
    /// the known workflow.
    pub fn status(&self, status: &Status) -> Option<(Color, Color)> {
        match status {
            Status::Open | Status::Reopened => Some(self.open),
            Status::InProgress => Some(self.in_progress),
            Status::Resolved => Some(self.resolved),
            Status::Closed => Some(self.closed),
            Status::Other(_) => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let bright_green = Color::Color256(10);
        let grey = Color::Color256(rgb_to_ansi256((154, 154, 154)));
        let dark_grey = Color::Color256(rgb_to_ansi256((100, 100, 100)));
        let brown = Color::Color256(rgb_to_ansi256((180, 130, 60)));

        Self {
            key: Color::White,
            open: (Color::White, Color::Blue),
            in_progress: (Color::Yellow, Color::Black),
            resolved: (bright_green, Color::Black),
            closed: (Color::Black, Color::Green),
            assigned_to_me: (Color::Blue, Color::Yellow),
            headline: (dark_grey, Color::Black),
            sigil: brown,
            reference: dark_grey,
            subtask_count: grey,
            bar_done: bright_green,
            bar_midway: Color::Green,
        }
    }
}

pub static DEFAULT_PALETTE: Lazy<Palette> = Lazy::new(Palette::default);
