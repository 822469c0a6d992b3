//! Greedy fixed-width caption layout.
//!
//! Line breaking uses an average glyph width of 0.55 em rather than true
//! glyph measurement, so the character budget per line is a constant for a
//! given font size and box width.

use super::geometry::{CaptionBox, BOX_MARGIN};

/// Horizontal inset of text relative to the box edges.
const PADDING: i32 = 40;
/// Vertical inset of the name line from the box top.
const BOX_PADDING: i32 = 30;

/// One positioned line of caption text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub content: String,
    pub x: i32,
    pub baseline_y: i32,
    pub font_size: i32,
}

/// Lay out the speaker name and dialogue inside the caption box.
///
/// The name line (when present) is drawn 30% larger and is never wrapped.
/// Dialogue is split on literal newlines into paragraphs; whitespace-only
/// paragraphs are skipped without advancing the cursor. Lines whose baseline
/// would land within 15px of the box bottom are dropped silently, with no
/// truncation indicator.
pub fn layout_caption(cbox: &CaptionBox, name: &str, text: &str, font_size: i32) -> Vec<TextLine> {
    let name_size = (font_size as f64 * 1.3).floor() as i32;
    let line_height = font_size.saturating_add(8);

    let char_width = font_size as f64 * 0.55;
    let max_width = cbox.width - PADDING * 2;
    let max_chars = (max_width as f64 / char_width).floor() as i64;

    let x = BOX_MARGIN + PADDING;
    let name_y = cbox.top + BOX_PADDING + (name_size as f64 * 0.8).floor() as i32;
    // Saturating: absurd font sizes push the cursor past the floor instead of
    // overflowing.
    let mut text_y = name_y.saturating_add(line_height).saturating_add(5);

    let mut lines = Vec::new();

    if !name.is_empty() {
        lines.push(TextLine {
            content: name.to_string(),
            x,
            baseline_y: name_y,
            font_size: name_size,
        });
    }

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            continue;
        }
        for sub_line in wrap_text(paragraph, max_chars) {
            // Dropping is per line, but the cursor only moves forward: once
            // one line falls past the floor, everything after it does too.
            if text_y < cbox.text_floor() {
                lines.push(TextLine {
                    content: sub_line,
                    x,
                    baseline_y: text_y,
                    font_size,
                });
                text_y = text_y.saturating_add(line_height);
            }
        }
    }

    lines
}

/// Split a paragraph into chunks of at most `max_chars` characters.
///
/// Purely character-count based, with no word-boundary awareness. A
/// non-positive budget disables wrapping entirely.
pub fn wrap_text(text: &str, max_chars: i64) -> Vec<String> {
    if text.is_empty() || max_chars <= 0 {
        return vec![text.to_string()];
    }
    let max_chars = max_chars as usize;
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for ch in text.chars() {
        if current_len >= max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(ch);
        current_len += 1;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
