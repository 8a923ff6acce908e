//! Line cursor that finds where new entries are spliced into a target file.
//!
//! The cursor walks the lines once through three states:
//!
//! ```text
//! ScanAnchor ──(line starts with anchor)──▶ ScanAlpha ──(boundary line)──▶ Done
//!      │                                        │
//!      └──────────────(no line left)────────────┴──────────────────────────▶ Done (end)
//! ```
//!
//! Every consumed line belongs to the head. The last head line is the
//! boundary: the first line that stopped the alphabetical scan, which is
//! re-emitted after the new entries rather than replaced.

use super::anchor::SortAnchor;

/// Where the lines are cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Split {
    /// Number of lines in the head; the tail is everything after.
    pub head_len: usize,
    /// The scan ran off the end of the file.
    pub insert_at_end: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanAnchor,
    ScanAlpha,
    Done(Split),
}

struct Cursor<'a> {
    lines: &'a [String],
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// The most recently consumed line, empty before the first one.
    fn current(&self) -> &'a str {
        self.consumed
            .checked_sub(1)
            .map_or("", |index| self.lines[index].as_str())
    }

    /// Consume the next line. Returns false when there is none left.
    fn advance(&mut self) -> bool {
        if self.consumed < self.lines.len() {
            self.consumed += 1;
            true
        } else {
            false
        }
    }

    fn split(&self, insert_at_end: bool) -> Split {
        Split {
            head_len: self.consumed,
            insert_at_end,
        }
    }
}

/// Locate the insertion point for entries whose first key is `first_key`.
pub(super) fn split(lines: &[String], anchor: &SortAnchor, first_key: &str) -> Split {
    let mut cursor = Cursor { lines, consumed: 0 };
    let mut state = State::ScanAnchor;

    loop {
        state = match state {
            State::Done(split) => return split,
            State::ScanAnchor if cursor.current().starts_with(anchor.text()) => State::ScanAlpha,
            State::ScanAlpha if at_boundary(cursor.current(), anchor, first_key) => {
                State::Done(cursor.split(false))
            }
            scanning => {
                if cursor.advance() {
                    scanning
                } else {
                    State::Done(cursor.split(true))
                }
            }
        };
    }
}

fn at_boundary(line: &str, anchor: &SortAnchor, first_key: &str) -> bool {
    line >= first_key || (anchor.is_override() && line.is_empty())
}
