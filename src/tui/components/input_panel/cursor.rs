//! Cursor position tracking and navigation for the code editor.
//!
//! `CursorState` owns the cursor byte offset and scroll offsets. The text
//! itself belongs to the coordinator, so every method takes `code: &str`
//! explicitly. Code is never soft-wrapped: long lines scroll horizontally.

use unicode_width::UnicodeWidthStr;

/// Cursor and scroll state, separated from the text it points into.
#[derive(Debug, Default)]
pub struct CursorState {
    /// Cursor position as byte offset in code (0..=code.len())
    pub pos: usize,
    /// First visible line
    pub row_offset: usize,
    /// First visible display column
    pub col_offset: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull `pos` back inside `code` and onto a char boundary. The code can
    /// change underneath the cursor (preloaded file, external setter).
    pub fn clamp(&mut self, code: &str) {
        if self.pos > code.len() {
            self.pos = code.len();
        }
        while !code.is_char_boundary(self.pos) {
            self.pos -= 1;
        }
    }

    /// Zero-based (line, display column) of the cursor.
    pub fn line_col(&self, code: &str) -> (usize, usize) {
        let before = &code[..self.pos];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        (line, before[line_start..].width())
    }

    /// Move cursor up or down one line, keeping the display column where the
    /// target line is long enough.
    ///
    /// Returns `true` if cursor moved, `false` if already at boundary.
    pub fn move_vertically(&mut self, code: &str, direction: i16) -> bool {
        let (line, col) = self.line_col(code);
        let target = if direction < 0 {
            match line.checked_sub(1) {
                Some(t) => t,
                None => return false,
            }
        } else {
            line + 1
        };

        let mut start = 0;
        for (idx, text) in code.split('\n').enumerate() {
            if idx == target {
                self.pos = start + byte_at_column(text, col);
                return true;
            }
            start += text.len() + 1;
        }
        false
    }

    pub fn line_start(&self, code: &str) -> usize {
        code[..self.pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    pub fn line_end(&self, code: &str) -> usize {
        code[self.pos..]
            .find('\n')
            .map(|i| self.pos + i)
            .unwrap_or(code.len())
    }

    /// Adjust scroll offsets so the cursor sits inside a viewport of
    /// `width` x `height` cells.
    pub fn update_scroll(&mut self, code: &str, width: u16, height: u16) {
        let (line, col) = self.line_col(code);
        let (width, height) = (usize::from(width), usize::from(height));

        if line < self.row_offset {
            self.row_offset = line;
        } else if height > 0 && line >= self.row_offset.saturating_add(height) {
            self.row_offset = line + 1 - height;
        }

        if col < self.col_offset {
            self.col_offset = col;
        } else if width > 0 && col >= self.col_offset.saturating_add(width) {
            self.col_offset = col + 1 - width;
        }
    }

    /// Cursor position relative to the viewport origin.
    pub fn viewport_pos(&self, code: &str) -> (u16, u16) {
        let (line, col) = self.line_col(code);
        (
            to_cells(col.saturating_sub(self.col_offset)),
            to_cells(line.saturating_sub(self.row_offset)),
        )
    }

    /// The slices of `code` that fall inside the viewport, one per visible
    /// line, already shifted by both scroll offsets.
    pub fn visible_lines<'a>(&self, code: &'a str, height: u16) -> Vec<&'a str> {
        code.split('\n')
            .skip(self.row_offset)
            .take(usize::from(height))
            .map(|line| &line[byte_at_column(line, self.col_offset)..])
            .collect()
    }
}

fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Byte offset within `line` of the char that starts at display column `col`,
/// or the line length if the line is shorter.
fn byte_at_column(line: &str, col: usize) -> usize {
    let mut width = 0;
    for (idx, ch) in line.char_indices() {
        if width >= col {
            return idx;
        }
        width += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    }
    line.len()
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
