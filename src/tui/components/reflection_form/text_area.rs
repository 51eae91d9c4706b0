//! Editable multi-line buffer for the reflection form.
//!
//! Rows are word-wrapped with textwrap. Each visual row owns a contiguous
//! byte range of the buffer (the whitespace a wrap swallows stays with the
//! row before it), so cursor placement maps straight back to byte offsets.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// One wrapped row of the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct VisualRow {
    /// Byte range into the buffer, excluding any trailing `\n`.
    pub bytes: Range<usize>,
    /// True if this is the final row of its logical line.
    pub ends_line: bool,
}

/// Build textwrap options for the text area inner width.
fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(usize::from(width))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Splits `text` into rows no wider than `width` columns.
/// Always returns at least one row.
pub(super) fn visual_rows(text: &str, width: u16) -> Vec<VisualRow> {
    let options = wrap_options(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        // textwrap hands back slices of `line` in order; locate each one to
        // recover where its row begins
        let mut starts = Vec::new();
        let mut pos = 0;
        for segment in textwrap::wrap(line, &options) {
            let found = line[pos..].find(segment.as_ref()).map_or(pos, |i| pos + i);
            starts.push(found);
            pos = found + segment.len();
        }
        if let Some(first) = starts.first_mut() {
            *first = 0;
        } else {
            starts.push(0);
        }

        for (index, start) in starts.iter().enumerate() {
            let end = starts.get(index + 1).copied().unwrap_or(line.len());
            rows.push(VisualRow {
                bytes: line_start + start..line_start + end,
                ends_line: index + 1 == starts.len(),
            });
        }
        line_start += line.len() + 1;
    }

    rows
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[derive(Debug, Default)]
pub struct TextArea {
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible row when the content is taller than the viewport
    scroll: usize,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, text: &str) {
        // Normalize CRLF from pasted text
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    pub fn backspace(&mut self) -> bool {
        let Some((prev, _)) = self.buffer[..self.cursor].char_indices().next_back() else {
            return false;
        };
        self.buffer.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        let Some(c) = self.buffer[self.cursor..].chars().next() else {
            return false;
        };
        self.buffer.drain(self.cursor..self.cursor + c.len_utf8());
        true
    }

    pub fn move_left(&mut self) -> bool {
        match self.buffer[..self.cursor].chars().next_back() {
            Some(c) => {
                self.cursor -= c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.buffer[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Start of the current logical line.
    pub fn move_home(&mut self) -> bool {
        let start = self.buffer[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
        let moved = start != self.cursor;
        self.cursor = start;
        moved
    }

    /// End of the current logical line.
    pub fn move_end(&mut self) -> bool {
        let end = self.buffer[self.cursor..]
            .find('\n')
            .map_or(self.buffer.len(), |i| self.cursor + i);
        let moved = end != self.cursor;
        self.cursor = end;
        moved
    }

    /// Moves one visual row up (`-1`) or down (`1`), keeping the column
    /// where the target row is long enough.
    pub fn move_vertically(&mut self, direction: i8, width: u16) -> bool {
        let rows = visual_rows(&self.buffer, width);
        let (row, col) = self.locate(&rows);

        let target = match direction {
            d if d < 0 && row > 0 => row - 1,
            d if d > 0 && row + 1 < rows.len() => row + 1,
            _ => return false,
        };

        let bytes = rows[target].bytes.clone();
        let mut offset = bytes.start;
        let mut consumed = 0;
        for c in self.buffer[bytes.clone()].chars() {
            let w = c.width().unwrap_or(0);
            if consumed + w > col {
                break;
            }
            consumed += w;
            offset += c.len_utf8();
        }
        // Landing on a wrap boundary would display on the next row
        if !rows[target].ends_line && offset == bytes.end && offset > bytes.start {
            offset = self.buffer[..offset]
                .char_indices()
                .next_back()
                .map_or(bytes.start, |(i, _)| i);
        }

        self.cursor = offset;
        true
    }

    /// (row, column) of the cursor within `rows`.
    fn locate(&self, rows: &[VisualRow]) -> (usize, usize) {
        for (index, row) in rows.iter().enumerate() {
            let inside = self.cursor < row.bytes.end
                || (self.cursor == row.bytes.end && row.ends_line);
            if self.cursor >= row.bytes.start && inside {
                let col = display_width(&self.buffer[row.bytes.start..self.cursor]);
                return (index, col);
            }
        }
        (rows.len().saturating_sub(1), 0)
    }

    /// Lines to draw for a viewport of `width` x `height`, plus the cursor's
    /// (column, row) inside that viewport. Adjusts scrolling to keep the
    /// cursor visible.
    pub fn viewport(&mut self, width: u16, height: u16) -> (Vec<&str>, (u16, u16)) {
        let height = usize::from(height.max(1));
        let rows = visual_rows(&self.buffer, width);
        let (cursor_row, cursor_col) = self.locate(&rows);

        if cursor_row < self.scroll {
            self.scroll = cursor_row;
        } else if cursor_row >= self.scroll + height {
            self.scroll = cursor_row + 1 - height;
        }
        let max_scroll = rows.len().saturating_sub(height);
        self.scroll = self.scroll.min(max_scroll);

        let lines = rows
            .iter()
            .skip(self.scroll)
            .take(height)
            .map(|row| self.buffer[row.bytes.clone()].trim_end_matches(' '))
            .collect();

        // Whitespace swallowed by a wrap can push the column past the edge
        let last_col = usize::from(width.saturating_sub(1));
        let cursor = (
            cursor_col.min(last_col) as u16,
            (cursor_row - self.scroll) as u16,
        );
        (lines, cursor)
    }

    #[cfg(test)]
    pub(super) fn scroll(&self) -> usize {
        self.scroll
    }

    #[cfg(test)]
    pub(super) fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_with(text: &str) -> TextArea {
        let mut area = TextArea::new();
        area.insert_str(text);
        area
    }

    #[test]
    fn test_visual_rows_wrap_by_width() {
        let rows = visual_rows("abcdefgh", 3);
        let ranges: Vec<_> = rows.iter().map(|r| r.bytes.clone()).collect();
        assert_eq!(ranges, vec![0..3, 3..6, 6..8]);
        assert!(!rows[0].ends_line);
        assert!(rows[2].ends_line);
    }

    #[test]
    fn test_visual_rows_wrap_on_word_boundaries() {
        let mut area = area_with("I feel nervous about tomorrow");
        let (lines, cursor) = area.viewport(10, 10);
        assert_eq!(lines, vec!["I feel", "nervous", "about", "tomorrow"]);
        assert_eq!(cursor, (8, 3));

        // The space swallowed by the wrap belongs to the row before it
        let rows = visual_rows("I feel nervous", 10);
        let ranges: Vec<_> = rows.iter().map(|r| r.bytes.clone()).collect();
        assert_eq!(ranges, vec![0..7, 7..14]);
    }

    #[test]
    fn test_cursor_after_word_wrap_starts_next_row() {
        let mut area = area_with("I feel nervous");
        for _ in 0.."nervous".len() {
            area.move_left();
        }
        let (_, cursor) = area.viewport(10, 5);
        assert_eq!(cursor, (0, 1));
    }

    #[test]
    fn test_cursor_stays_inside_full_row() {
        let mut area = area_with("abcde");
        let (lines, cursor) = area.viewport(5, 3);
        assert_eq!(lines, vec!["abcde"]);
        assert_eq!(cursor, (4, 0));

        // Trailing spaces never move the cursor onto the border
        let mut area = area_with("abc        ");
        let (_, cursor) = area.viewport(5, 3);
        assert!(cursor.0 < 5);
    }

    #[test]
    fn test_visual_rows_respect_newlines() {
        let rows = visual_rows("ab\n\ncd", 10);
        let ranges: Vec<_> = rows.iter().map(|r| r.bytes.clone()).collect();
        assert_eq!(ranges, vec![0..2, 3..3, 4..6]);
        assert!(rows.iter().all(|r| r.ends_line));
    }

    #[test]
    fn test_visual_rows_wide_glyphs() {
        // Each emoji is two columns wide
        let rows = visual_rows("😊😊😊", 4);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bytes, 0..8);
    }

    #[test]
    fn test_empty_buffer_has_one_row() {
        assert_eq!(visual_rows("", 10).len(), 1);
        assert_eq!(visual_rows("abc\n", 10).len(), 2);
    }

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut area = TextArea::new();
        area.insert_char('é');
        area.insert_char('a');
        assert_eq!(area.text(), "éa");
        assert!(area.backspace());
        assert!(area.backspace());
        assert!(area.is_empty());
        assert!(!area.backspace());
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut area = area_with("abc");
        area.move_home();
        assert!(area.delete());
        assert_eq!(area.text(), "bc");
        area.move_end();
        assert!(!area.delete());
    }

    #[test]
    fn test_left_right_bounds() {
        let mut area = area_with("ab");
        assert!(!area.move_right());
        assert!(area.move_left());
        assert!(area.move_left());
        assert!(!area.move_left());
        assert_eq!(area.cursor(), 0);
    }

    #[test]
    fn test_home_end_within_logical_line() {
        let mut area = area_with("first\nsecond");
        assert!(area.move_home());
        assert_eq!(area.cursor(), 6);
        assert!(area.move_end());
        assert_eq!(area.cursor(), 12);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let area = area_with("one\r\ntwo\rthree");
        assert_eq!(area.text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut area = area_with("abcdef\nxy");
        // Cursor at end of "xy" (row 1, col 2)
        assert!(area.move_vertically(-1, 20));
        assert_eq!(area.cursor(), 2);
        assert!(!area.move_vertically(-1, 20));
        assert!(area.move_vertically(1, 20));
        assert_eq!(area.cursor(), 9);
        assert!(!area.move_vertically(1, 20));
    }

    #[test]
    fn test_vertical_movement_across_wrapped_rows() {
        let mut area = area_with("abcdefgh");
        // Rows at width 3: "abc" "def" "gh"; cursor at end (row 2, col 2)
        assert!(area.move_vertically(-1, 3));
        assert_eq!(area.cursor(), 5);
        assert!(area.move_vertically(-1, 3));
        assert_eq!(area.cursor(), 2);
    }

    #[test]
    fn test_viewport_scrolls_to_cursor() {
        let mut area = area_with("1\n2\n3\n4\n5\n6");
        let (lines, cursor) = area.viewport(10, 3);
        assert_eq!(lines, vec!["4", "5", "6"]);
        assert_eq!(cursor, (1, 2));
        assert_eq!(area.scroll(), 3);

        area.move_vertically(-1, 10);
        area.move_vertically(-1, 10);
        area.move_vertically(-1, 10);
        let (lines, cursor) = area.viewport(10, 3);
        assert_eq!(lines[0], "3");
        assert_eq!(cursor.1, 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut area = area_with("1\n2\n3\n4\n5\n6");
        area.viewport(10, 2);
        area.clear();
        assert!(area.is_empty());
        assert_eq!(area.cursor(), 0);
        assert_eq!(area.scroll(), 0);
    }

    #[test]
    fn test_char_count() {
        assert_eq!(area_with("héllo").char_count(), 5);
    }
}
