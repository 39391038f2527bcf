//! Label measurement helpers.
//!
//! Tiles reserve vertical space below their image for title text. The grid
//! packer only consumes the resulting `non_image_height`; these helpers
//! derive it from the label content and the column width so item builders do
//! not need the hosting text system.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Display width of a label in character cells.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy wrap of label content against a cell budget. Existing newlines are
/// preserved; leading spaces on continuation lines are dropped.
pub fn wrap_label(content: &str, max_columns: usize) -> Vec<String> {
    if max_columns == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for raw in content.split('\n') {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for ch in raw.chars() {
            if current.is_empty() && ch == ' ' {
                continue;
            }
            current.push(ch);
            if display_width(&current) > max_columns {
                current.pop();
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                if ch != ' ' {
                    current.push(ch);
                }
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Converts wrapped label lines into points of tile height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelMetrics {
    /// Average glyph advance in points.
    pub char_width: f32,
    /// Line height in points.
    pub line_height: f32,
    /// Titles truncate past this many lines.
    pub max_lines: usize,
}

impl Default for LabelMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 18.0,
            max_lines: 2,
        }
    }
}

impl LabelMetrics {
    /// Vertical space the label consumes below the image when laid out
    /// within `column_width` points.
    pub fn non_image_height(&self, text: &str, column_width: f32) -> f32 {
        if text.is_empty() || self.char_width <= 0.0 {
            return 0.0;
        }
        let budget = (column_width / self.char_width).floor() as usize;
        if budget == 0 {
            return 0.0;
        }
        let lines = wrap_label(text, budget).len().min(self.max_lines);
        lines as f32 * self.line_height
    }
}
