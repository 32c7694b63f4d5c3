//! # Rendering Module
//!
//! Turns already-fetched tracker records into fixed-width terminal text.
//! All layout math runs on display widths via the `linotype` engine, so the
//! same code produces byte-identical column positions with color on or off.
//!
//! The [`Printer`] is pure: it holds an immutable [`RenderConfig`] plus a
//! [`Palette`] and only ever returns strings. Writing them out is the
//! binary's job.

mod styles;

pub use styles::{Palette, DEFAULT_PALETTE};

use crate::config::RenderConfig;
use crate::model::{Comment, Issue, Status, User};
use chrono::{DateTime, Utc};
use linotype::{align, bar, wrap, Color, Column, Text};
use unicode_width::UnicodeWidthStr;

/// Cells between the brackets of a subtask progress bar.
const BAR_LENGTH: usize = 10;

/// Renders issues, subtask trees, cards and comment threads.
pub struct Printer {
    width: usize,
    use_color: bool,
    me: Option<User>,
    palette: Palette,
}

impl Printer {
    /// Printer with the process-wide default palette.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_palette(config, *DEFAULT_PALETTE)
    }

    pub fn with_palette(config: RenderConfig, palette: Palette) -> Self {
        Self {
            width: config.width,
            use_color: config.use_color,
            me: config.me,
            palette,
        }
    }

    /// One-line form: `<key> <status> -- <summary>` plus suffixes for parent,
    /// assignee and subtask count where present.
    pub fn oneline(&self, issue: &Issue) -> String {
        self.oneline_with(issue, true, true)
    }

    /// `oneline` with explicit control over key coloring and the subtask
    /// count suffix (the tree view renders both differently).
    pub fn oneline_with(&self, issue: &Issue, color_key: bool, show_subtasks: bool) -> String {
        let key: Text = if color_key {
            Text::styled(issue.key.clone(), self.palette.key)
        } else {
            Text::plain(issue.key.clone())
        };

        let mut line = key + " " + self.status_text(issue) + " -- " + issue.summary.as_str();

        if let Some(parent) = &issue.parent {
            line = line
                + Text::styled(" ^", self.palette.sigil)
                + Text::styled(parent.key.clone(), self.palette.reference);
        }

        if let Some(assignee) = &issue.assignee {
            line = line
                + Text::styled(" @", self.palette.sigil)
                + Text::styled(assignee.label().to_string(), self.palette.reference);
        }

        if !issue.subtasks.is_empty() && show_subtasks {
            line = line
                + Text::styled(
                    format!(" [{} Subtasks]", issue.subtasks.len()),
                    self.palette.subtask_count,
                );
        }

        line.render(self.use_color)
    }

    /// Oneline plus a progress bar over the immediate subtasks and one branch
    /// line per subtask, the last branch closed with a backtick.
    pub fn tree(&self, issue: &Issue) -> String {
        let mut s = self.oneline_with(issue, true, false);

        if let Some((last, rest)) = issue.subtasks.split_last() {
            s.push(' ');
            s.push_str(&self.progress(&issue.subtasks));
            s.push('\n');

            for subtask in rest {
                s.push_str(" |- ");
                s.push_str(&self.oneline_with(subtask, false, true));
                s.push('\n');
            }
            s.push_str(" `- ");
            s.push_str(&self.oneline_with(last, false, true));
            s.push('\n');
        }

        s
    }

    /// Full card: aligned header, rulers, updated timestamp, optional parent,
    /// summary, word-wrapped description and subtask list. Sections backed by
    /// missing optional fields are skipped, never errors.
    pub fn card(&self, issue: &Issue) -> String {
        let mut s = String::new();

        let header = align(
            &[
                Column::new(Text::styled(issue.key.clone(), self.palette.key), 10),
                Column::new(self.headline("Type: ") + issue.issue_type.as_str(), 20),
                Column::new(self.headline("Status: ") + self.status_text(issue), 20),
            ],
            self.width,
        );
        push_line(&mut s, header.render(self.use_color));
        push_line(&mut s, self.ruler());

        push_line(
            &mut s,
            (self.headline("Updated: ") + format_date(issue.updated)).render(self.use_color),
        );

        if let Some(parent) = &issue.parent {
            push_line(&mut s, self.ruler());
            push_line(&mut s, format!("Parent: {}", self.oneline(parent)));
        }

        push_line(&mut s, self.ruler());
        push_line(&mut s, issue.summary.clone());

        if let Some(description) = issue.description.as_deref().filter(|d| !d.trim().is_empty()) {
            push_line(&mut s, self.ruler());
            for line in wrap(description, self.width) {
                push_line(&mut s, line);
            }
        }

        if !issue.subtasks.is_empty() {
            push_line(&mut s, self.ruler());
            push_line(&mut s, self.headline("Subtasks").render(self.use_color));
            s.push('\n');
            for subtask in &issue.subtasks {
                push_line(&mut s, format!("  - {}", self.oneline(subtask)));
            }
        }

        s
    }

    /// Comment thread in input order: a full-width dated rule, the body, a
    /// blank line. Comments are never reordered or deduplicated.
    pub fn comments(&self, comments: &[Comment]) -> String {
        let mut s = String::new();

        for comment in comments {
            let date = format_date(comment.created);
            // "--- " plus the trailing space is 5 cells; the rule tops the
            // header up to exactly the terminal width when it fits.
            let rule = "-".repeat(self.width.saturating_sub(date.width() + 5));
            push_line(&mut s, format!("--- {} {}", date, rule));
            push_line(&mut s, comment.body.clone());
            s.push('\n');
        }

        s
    }

    fn status_text(&self, issue: &Issue) -> Text {
        let label = issue.status.to_string();
        match self.status_style(issue) {
            Some((fg, bg)) => Text::styled_on(label, fg, bg),
            None => Text::plain(label),
        }
    }

    /// Palette lookup with the assigned-to-me override for in-progress work.
    fn status_style(&self, issue: &Issue) -> Option<(Color, Color)> {
        if issue.status == Status::InProgress {
            if let (Some(me), Some(assignee)) = (&self.me, &issue.assignee) {
                if assignee == me {
                    return Some(self.palette.assigned_to_me);
                }
            }
        }
        self.palette.status(&issue.status)
    }

    fn progress(&self, subtasks: &[Issue]) -> String {
        let done = subtasks.iter().filter(|i| i.status.is_done()).count();
        bar(
            done,
            subtasks.len(),
            BAR_LENGTH,
            self.palette.bar_done,
            self.palette.bar_midway,
        )
        .render(self.use_color)
    }

    fn headline(&self, text: impl Into<String>) -> Text {
        let (fg, bg) = self.palette.headline;
        Text::styled_on(text, fg, bg)
    }

    fn ruler(&self) -> String {
        self.headline("-".repeat(self.width)).render(self.use_color)
    }
}

fn push_line(s: &mut String, line: impl AsRef<str>) {
    s.push_str(line.as_ref());
    s.push('\n');
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%y %H:%M").to_string()
}
