//! # Linotype - Width-True Styled Terminal Text
//!
//! Building blocks for fixed-width terminal layout with optional ANSI color.
//!
//! ## The Problem
//!
//! Column layout breaks the moment color enters the picture: an ANSI-styled
//! string reports a byte length far larger than the cells it occupies, so any
//! padding math done on the rendered string drifts. Terminals without color
//! support (pipes, CI, `TERM=dumb`) add a second axis: the same layout must
//! come out identical with styling stripped.
//!
//! ## The Solution
//!
//! Linotype separates *display width* from *rendered form*:
//! - [`Span`] is a text run plus optional foreground/background color. Its
//!   [`Span::width`] counts visible cells only, whether or not color is active.
//! - [`Text`] is the closed set of things layout code accepts: a plain string,
//!   a styled span, or the concatenation of two of them. Concatenation (`+`)
//!   keeps width additive and rendering order-preserving.
//! - [`align`] lays a row of [`Column`]s out to a target width, [`bar`] renders
//!   a fixed-length progress gauge, and [`wrap`] word-wraps prose — all of them
//!   computing on widths, never on rendered bytes.
//!
//! ## Quick Example
//!
//! ```rust
//! use linotype::{align, Color, Column, Span, Text};
//!
//! let key = Text::from(Span::new("PROJ-17", Color::White));
//! let status = Text::from(Span::new("Open", Color::White).on(Color::Blue));
//!
//! let row = align(
//!     &[Column::new(key, 10), Column::new(status, 20)],
//!     80,
//! );
//! assert_eq!(row.width(), 80);
//!
//! // Plain rendering carries no escape bytes; styled rendering does, but the
//! // display width is the same either way.
//! let plain = row.render(false);
//! assert_eq!(plain.len(), 80);
//! ```
//!
//! ## Color Degradation
//!
//! `render(false)` is the supported no-color mode, not an error path: every
//! span falls back to its raw content and all widths are unchanged. Callers
//! decide the flag once (e.g. from `console::Term::stdout().features()`)
//! and thread it through.

use console::Style;
use unicode_width::UnicodeWidthStr;

pub use console::Color;

/// A run of text with optional foreground and background color.
///
/// Construction never fails and a span is immutable once built. The escape
/// bytes a colored span renders to are never part of its [`width`](Span::width).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    content: String,
    fg: Option<Color>,
    bg: Option<Color>,
}

impl Span {
    /// Creates an unstyled span.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            fg: None,
            bg: None,
        }
    }

    /// Creates a span with a foreground color.
    pub fn new(content: impl Into<String>, fg: Color) -> Self {
        Self {
            content: content.into(),
            fg: Some(fg),
            bg: None,
        }
    }

    /// Adds a background color.
    pub fn on(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Display width in terminal cells. Styling never contributes.
    pub fn width(&self) -> usize {
        self.content.width()
    }

    /// Renders the span.
    ///
    /// With `use_color` off, or without a foreground color, this is exactly
    /// the content. Otherwise the content is wrapped in the color escapes and
    /// a trailing reset.
    pub fn render(&self, use_color: bool) -> String {
        let Some(fg) = self.fg else {
            return self.content.clone();
        };
        if !use_color {
            return self.content.clone();
        }

        // force_styling: the caller already decided colors are wanted, so do
        // not second-guess based on whether stdout is a tty.
        let mut style = Style::new().force_styling(true).fg(fg);
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style.apply_to(&self.content).to_string()
    }
}

/// The closed set of text values layout code operates on.
///
/// `Composite` holds the two halves of a concatenation; its width is the sum
/// of the halves and its rendered form is their renders back to back. That
/// pair of invariants is what keeps padding math correct under styling.
#[derive(Debug, Clone)]
pub enum Text {
    Plain(String),
    Styled(Span),
    Composite(Box<Text>, Box<Text>),
}

impl Text {
    /// Creates an unstyled text value.
    pub fn plain(content: impl Into<String>) -> Self {
        Text::Plain(content.into())
    }

    /// Creates a text value with a foreground color.
    pub fn styled(content: impl Into<String>, fg: Color) -> Self {
        Text::Styled(Span::new(content, fg))
    }

    /// Creates a text value with foreground and background colors.
    pub fn styled_on(content: impl Into<String>, fg: Color, bg: Color) -> Self {
        Text::Styled(Span::new(content, fg).on(bg))
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        match self {
            Text::Plain(s) => s.width(),
            Text::Styled(span) => span.width(),
            Text::Composite(a, b) => a.width() + b.width(),
        }
    }

    /// Renders to a string, with or without ANSI color.
    pub fn render(&self, use_color: bool) -> String {
        match self {
            Text::Plain(s) => s.clone(),
            Text::Styled(span) => span.render(use_color),
            Text::Composite(a, b) => {
                let mut out = a.render(use_color);
                out.push_str(&b.render(use_color));
                out
            }
        }
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Plain(s.to_string())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::Plain(s)
    }
}

impl From<Span> for Text {
    fn from(span: Span) -> Self {
        Text::Styled(span)
    }
}

impl<T: Into<Text>> std::ops::Add<T> for Text {
    type Output = Text;

    fn add(self, rhs: T) -> Text {
        Text::Composite(Box::new(self), Box::new(rhs.into()))
    }
}

/// One cell of a row layout: a text value and its declared minimum width.
///
/// A column whose content is wider than its declared width claims the content
/// width instead; content is never truncated.
#[derive(Debug, Clone)]
pub struct Column {
    pub text: Text,
    pub min_width: usize,
}

impl Column {
    pub fn new(text: impl Into<Text>, min_width: usize) -> Self {
        Self {
            text: text.into(),
            min_width,
        }
    }
}

fn spaces(n: usize) -> Text {
    Text::Plain(" ".repeat(n))
}

fn pad_right(text: &Text, width: usize) -> Text {
    let fill = width.saturating_sub(text.width());
    text.clone() + spaces(fill)
}

fn pad_left(text: &Text, width: usize) -> Text {
    spaces(width.saturating_sub(text.width())) + text.clone()
}

fn pad_center(text: &Text, width: usize) -> Text {
    let fill = width.saturating_sub(text.width());
    // Odd slack goes to the right side.
    spaces(fill / 2) + text.clone() + spaces(fill - fill / 2)
}

/// Lays out columns into a single row of at least `total_width` cells.
///
/// With fewer than two columns the text is returned as-is. Otherwise the
/// first column is right-padded to its declared width and additionally
/// receives all leftover slack, middle columns are centered within their
/// declared widths, and the last column is right-flushed. Slack is computed
/// against *effective* widths (`max(min_width, content width)`), so a row
/// whose content overflows its declared widths simply grows past
/// `total_width` instead of truncating.
pub fn align(columns: &[Column], total_width: usize) -> Text {
    match columns {
        [] => Text::plain(""),
        [only] => only.text.clone(),
        [first, rest @ ..] => {
            let effective: usize = columns
                .iter()
                .map(|c| c.min_width.max(c.text.width()))
                .sum();
            let slack = total_width.saturating_sub(effective);

            let mut row = pad_right(&first.text, first.min_width) + spaces(slack);
            let (last, mids) = rest.split_last().expect("rest is non-empty here");
            for mid in mids {
                row = row + pad_center(&mid.text, mid.min_width);
            }
            row + pad_left(&last.text, last.min_width)
        }
    }
}

const BAR_DONE: char = '=';
const BAR_MIDWAY: char = '~';

/// Renders a fixed-length progress gauge as `[====~     ]`.
///
/// The done and remaining runs are floored independently, which can lose one
/// cell to rounding; when work remains and a cell was lost, a single midway
/// transition cell absorbs it. A zero total renders the all-empty gauge
/// rather than dividing. The glyph count between the brackets is always
/// exactly `length`.
pub fn bar(done: usize, total: usize, length: usize, done_color: Color, midway_color: Color) -> Text {
    if total == 0 {
        return Text::plain("[") + spaces(length) + "]";
    }

    let undone = total - done;
    let done_part = done * length / total;
    let undone_part = undone * length / total;
    let transition = usize::from(done != total && done_part + undone_part < length);

    Text::plain("[")
        + Text::styled(
            BAR_DONE.to_string().repeat(done_part),
            done_color,
        )
        + Text::styled(
            BAR_MIDWAY.to_string().repeat(transition),
            midway_color,
        )
        + spaces(length - done_part - transition)
        + "]"
}

/// Greedy word wrap on display width.
///
/// Runs of whitespace collapse to single spaces. A word wider than `width`
/// gets a line of its own untruncated. Empty or whitespace-only input yields
/// no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(s: &str, w: usize) -> Column {
        Column::new(s, w)
    }

    fn plain_align(cols: &[Column], width: usize) -> String {
        align(cols, width).render(false)
    }

    #[test]
    fn test_span_width_ignores_styling() {
        let plain = Span::plain("hello");
        let styled = Span::new("hello", Color::Red).on(Color::Black);
        assert_eq!(plain.width(), 5);
        assert_eq!(styled.width(), 5);
    }

    #[test]
    fn test_span_render_plain_without_color() {
        let span = Span::new("hello", Color::Red);
        assert_eq!(span.render(false), "hello");
    }

    #[test]
    fn test_span_render_plain_without_foreground() {
        // Styling is keyed off the foreground; a bare span stays bare even
        // with colors on.
        let span = Span::plain("hello");
        assert_eq!(span.render(true), "hello");
    }

    #[test]
    fn test_span_render_styled_has_ansi_and_reset() {
        let span = Span::new("hello", Color::Red);
        let out = span.render(true);
        assert!(out.contains("hello"));
        assert!(out.starts_with("\x1b["));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_span_render_with_background() {
        let span = Span::new("Open", Color::White).on(Color::Blue);
        let out = span.render(true);
        assert!(out.contains("\x1b[37m")); // white fg
        assert!(out.contains("\x1b[44m")); // blue bg
    }

    #[test]
    fn test_composite_width_is_additive() {
        let a = Text::styled("abc", Color::Red);
        let b = Text::styled("defg", Color::Green);
        assert_eq!((a + b).width(), 7);
    }

    #[test]
    fn test_composite_render_concatenates_styled_and_styled() {
        let a = Text::styled("abc", Color::Red);
        let b = Text::styled("def", Color::Green);
        let joined = (a.clone() + b.clone()).render(true);
        assert_eq!(joined, a.render(true) + &b.render(true));
    }

    #[test]
    fn test_composite_render_concatenates_styled_and_raw() {
        let a = Text::styled("abc", Color::Red);
        let joined = a.clone() + " plain";
        assert_eq!(joined.width(), 9);
        assert_eq!(joined.render(false), "abc plain");
        assert_eq!(joined.render(true), a.render(true) + " plain");
    }

    #[test]
    fn test_composite_nests() {
        let t = Text::plain("a") + "b" + Span::new("c", Color::Blue) + "d";
        assert_eq!(t.width(), 4);
        assert_eq!(t.render(false), "abcd");
    }

    #[test]
    fn test_text_width_is_unicode_aware() {
        assert_eq!(Text::plain("日本").width(), 4);
    }

    #[test]
    fn test_align_empty() {
        assert_eq!(plain_align(&[], 80), "");
    }

    #[test]
    fn test_align_one_column_ignores_width() {
        let s = plain_align(&[col("XYZ", 20)], 80);
        assert_eq!(s.len(), 3);
        assert_eq!(s, "XYZ");
    }

    #[test]
    fn test_align_two_columns() {
        let s = plain_align(&[col("XYZ", 20), col("ABC", 10)], 80);
        assert_eq!(s.len(), 80);
        // First column keeps its own padding plus all slack; last column is
        // right-flushed within its declared width.
        assert_eq!(s, format!("XYZ{}{}ABC", " ".repeat(67), " ".repeat(7)));
    }

    #[test]
    fn test_align_three_columns_centers_middle() {
        let s = plain_align(&[col("XYZ", 20), col("PQR", 5), col("ABC", 10)], 80);
        assert_eq!(s.len(), 80);
        assert_eq!(
            s,
            format!(
                "XYZ{}{} PQR {}ABC",
                " ".repeat(17),
                " ".repeat(45),
                " ".repeat(7)
            )
        );
    }

    #[test]
    fn test_align_four_columns() {
        let s = plain_align(
            &[col("XYZ", 20), col("PQR", 5), col("ABC", 10), col("123", 20)],
            80,
        );
        assert_eq!(s.len(), 80);
        assert_eq!(
            s,
            format!(
                "XYZ{}{} PQR {}ABC{}{}123",
                " ".repeat(17),
                " ".repeat(25),
                " ".repeat(3),
                " ".repeat(4),
                " ".repeat(17)
            )
        );
    }

    #[test]
    fn test_align_overflowing_column_claims_content_width() {
        let s = plain_align(
            &[col("EXEED TO EIGHTTEEN", 10), col("PQR", 5), col("ABC", 10)],
            80,
        );
        assert_eq!(s.len(), 80);
        assert_eq!(
            s,
            format!(
                "EXEED TO EIGHTTEEN{} PQR {}ABC",
                " ".repeat(47),
                " ".repeat(7)
            )
        );
    }

    #[test]
    fn test_align_exceeds_target_when_content_sum_does() {
        let s = plain_align(
            &[col("EXEED TO EIGHTTEEN", 10), col("PQR", 5), col("ABC", 10)],
            25,
        );
        assert_eq!(s.len(), 33);
        assert_eq!(s, format!("EXEED TO EIGHTTEEN PQR {}ABC", " ".repeat(7)));
    }

    #[test]
    fn test_align_width_never_below_target_when_content_fits() {
        let row = align(&[col("a", 4), col("b", 4), col("c", 4)], 40);
        assert_eq!(row.width(), 40);
    }

    #[test]
    fn test_align_uses_display_width_not_rendered_bytes() {
        let key = Column::new(Span::new("KEY", Color::White), 10);
        let status = Column::new(Span::new("Open", Color::White).on(Color::Blue), 10);
        let row = align(&[key, status], 40);
        assert_eq!(row.width(), 40);
        assert_eq!(row.render(false).len(), 40);
        // Styled rendering is longer in bytes but identical in cells.
        assert!(row.render(true).len() > 40);
    }

    #[test]
    fn test_bar_two_of_three_done_has_transition_cell() {
        // floor(2/3*10)=6 done, floor(1/3*10)=3 empty, 6+3<10 -> one midway cell.
        let out = bar(2, 3, 10, Color::Green, Color::Yellow).render(false);
        assert_eq!(out, "[======~   ]");
        assert_eq!(out.len(), 12);
    }

    #[test]
    fn test_bar_exact_split_has_no_transition() {
        let out = bar(1, 2, 10, Color::Green, Color::Yellow).render(false);
        assert_eq!(out, "[=====     ]");
    }

    #[test]
    fn test_bar_all_done() {
        let out = bar(4, 4, 10, Color::Green, Color::Yellow).render(false);
        assert_eq!(out, "[==========]");
    }

    #[test]
    fn test_bar_none_done() {
        let out = bar(0, 5, 10, Color::Green, Color::Yellow).render(false);
        assert_eq!(out, "[          ]");
    }

    #[test]
    fn test_bar_zero_total_renders_empty_gauge() {
        let out = bar(0, 0, 10, Color::Green, Color::Yellow).render(false);
        assert_eq!(out, "[          ]");
    }

    #[test]
    fn test_bar_glyph_count_is_always_length() {
        for total in 1..=9usize {
            for done in 0..=total {
                let out = bar(done, total, 10, Color::Green, Color::Yellow).render(false);
                assert_eq!(out.len(), 12, "done={} total={}", done, total);
            }
        }
    }

    #[test]
    fn test_bar_segments_are_styled_runs() {
        let out = bar(2, 3, 10, Color::Green, Color::Yellow).render(true);
        // Done run in green, midway in yellow, empty run unstyled.
        assert!(out.contains("\x1b[32m======"));
        assert!(out.contains("\x1b[33m~"));
        assert!(out.ends_with("   ]"));
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_width() {
        assert_eq!(
            wrap("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_empty_text_has_no_lines() {
        assert!(wrap("", 80).is_empty());
        assert!(wrap("   \n ", 80).is_empty());
    }

    #[test]
    fn test_wrap_long_word_gets_own_line() {
        assert_eq!(
            wrap("a reallyreallylongword b", 8),
            vec!["a", "reallyreallylongword", "b"]
        );
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap("a   b\n\nc", 80), vec!["a b c"]);
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }
}
