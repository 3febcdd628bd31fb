//! Text boxes: wrapping, alignment and truncation

use crate::constants::DEFAULT_LINE_HEIGHT_MULTIPLIER;
use crate::font::FontMetrics;
use crate::layout::Rect;
use crate::style::{Alignment, TextStyle, VerticalAlignment};
use tracing::trace;

/// A single line of text positioned on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Left edge of the line
    pub x: f32,
    /// Baseline of the line
    pub baseline: f32,
}

/// Break text into lines no wider than `max_width`.
///
/// Explicit newlines are kept, words are wrapped on whitespace and a word
/// wider than the line is split between characters.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();
    let space_width = metrics.char_width(' ', font_size);

    for segment in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in segment.split_whitespace() {
            let word_width = metrics.text_width(word, font_size);

            if !current.is_empty() && current_width + space_width + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space_width + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Split an overlong word, keeping its tail open for the next word
            let mut chunk = String::new();
            let mut chunk_width = 0.0;
            for ch in word.chars() {
                let cw = metrics.char_width(ch, font_size);
                if !chunk.is_empty() && chunk_width + cw > max_width {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0.0;
                }
                chunk.push(ch);
                chunk_width += cw;
            }
            current = chunk;
            current_width = chunk_width;
        }

        lines.push(current);
    }

    trace!("Wrapped text into {} lines", lines.len());
    lines
}

/// Lay out `text` inside `rect`.
///
/// Lines that do not fit the box height are dropped from the end, so a box
/// shorter than one line yields nothing.
pub fn layout_text_box(
    text: &str,
    rect: Rect,
    style: &TextStyle,
    metrics: &dyn FontMetrics,
) -> Vec<PlacedLine> {
    let font_size = style.font_size;
    let line_height = font_size * DEFAULT_LINE_HEIGHT_MULTIPLIER;

    let mut lines = wrap_text(text, rect.width, font_size, metrics);
    let max_lines = (rect.height / line_height).floor().max(0.0) as usize;
    if lines.len() > max_lines {
        trace!("Truncating {} lines to {}", lines.len(), max_lines);
        lines.truncate(max_lines);
    }

    let total_height = lines.len() as f32 * line_height;
    let first_baseline = match style.vertical_alignment {
        VerticalAlignment::Top => rect.top() - font_size,
        VerticalAlignment::Middle => rect.top() - (rect.height - total_height) / 2.0 - font_size,
        VerticalAlignment::Bottom => rect.y + total_height - font_size,
    };

    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            let width = metrics.text_width(&line, font_size);
            let x = match style.alignment {
                Alignment::Left => rect.x,
                Alignment::Center => rect.x + (rect.width - width) / 2.0,
                Alignment::Right => rect.x + rect.width - width,
            };
            PlacedLine {
                text: line,
                x,
                baseline: first_baseline - idx as f32 * line_height,
            }
        })
        .collect()
}
