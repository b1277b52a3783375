// props-scanner - an external indentation scanner for the props language.
// Copyright (C) 2025 Josh Bedwell.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! The indentation state machine.
//!
//! [Scanner] tracks the stack of open indentation widths for one parse
//! branch.  The host calls [Scanner::scan] at every position where one of the
//! delegated tokens could appear, and brackets each call with
//! [Scanner::deserialize] and [Scanner::serialize] so that speculative
//! branches and backtracking each see their own copy of the stack.
//!
//! A scan emits at most one token.  A line that closes several blocks
//! produces one [Dedent](ScanToken::Dedent) per call, with the host calling
//! back at the same position until the stack matches the line's indentation.

use smallvec::SmallVec;
use thiserror::Error as ThisError;

use crate::cursor::Cursor;
use crate::token::{ScanToken, TokenSet};

/// Indentation columns saturate at this width so that every stack level fits
/// one serialized byte.  A line indented deeper compares equal to the
/// saturated width and opens no further block.
pub const MAX_WIDTH: u8 = u8::MAX;

/// Upper bound on stack depth.  Levels are strictly increasing one-byte
/// widths, so at most this many can nest above the implicit outermost level;
/// a serialization buffer this large never truncates.
pub const MAX_DEPTH: usize = MAX_WIDTH as usize;

/// Policy for a dedent whose width matches no open indentation level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mismatch {
    /// Pop one level per scan and adopt the unmatched width as the new
    /// innermost level, so the block structure settles without a spurious
    /// indent afterwards.
    #[default]
    Lenient,

    /// Refuse to emit the dedent (scan returns false, stack untouched) and
    /// leave recovery to the host.
    Strict,
}

/// Scanner configuration, fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// A tab advances the column to the next multiple of this width.
    pub tab_width: u8,

    /// Policy for dedents that match no open level.
    pub mismatch: Mismatch,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_width: 8,
            mismatch: Mismatch::Lenient,
        }
    }
}

/// Error decoding a serialized indentation stack.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Serialized level does not nest inside the level below it.
    #[error("Serialized level {level} at index {index} does not nest inside the level below it.")]
    NonMonotonicLevel {
        /// Byte offset of the offending level.
        index: usize,
        /// The offending width.
        level: u8,
    },
}

/// Indentation scanner state for one parse branch.
///
/// Created at the start of a parse session and dropped at its end.  Each
/// speculative branch owns an independent `Scanner`, reconstituted from the
/// branch's serialized snapshot; mutating one branch's scanner never affects
/// another's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scanner {
    /// Open indentation widths above the implicit outermost level 0,
    /// strictly increasing bottom to top.  Level 0 is never stored.
    stack: SmallVec<[u8; 8]>,
    options: Options,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Returns a scanner at the initial state (outermost level only) with
    /// default [Options].
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Returns a scanner at the initial state with the given `options`.
    pub fn with_options(options: Options) -> Self {
        Self {
            stack: SmallVec::new(),
            options,
        }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns the number of open levels above the outermost level 0.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the innermost open indentation width.
    pub fn top(&self) -> u8 {
        self.stack.last().copied().unwrap_or(0)
    }

    /// Encodes the stack into `buffer`, one byte per level, bottom to top,
    /// and returns the number of bytes written.  The initial state writes
    /// zero bytes.  If `buffer` is shorter than the stack is deep, the
    /// deepest levels are silently dropped; a buffer of [MAX_DEPTH] bytes
    /// always suffices.
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        let n = self.stack.len().min(buffer.len());
        buffer[..n].copy_from_slice(&self.stack[..n]);
        n
    }

    /// Replaces the stack with the levels encoded in `buffer`.  An empty
    /// buffer resets to the initial state.
    ///
    /// Levels must be strictly increasing and nonzero; otherwise the state is
    /// left reset to the initial state and an error identifies the first
    /// offending byte.  The encoding carries no version marker, so buffers
    /// from other scanner revisions are only honored as far as they follow
    /// this layout.
    pub fn deserialize(&mut self, buffer: &[u8]) -> Result<(), StateError> {
        self.stack.clear();
        for (index, &level) in buffer.iter().enumerate() {
            if level <= self.top() {
                self.stack.clear();
                return Err(StateError::NonMonotonicLevel { index, level });
            }
            self.stack.push(level);
        }
        Ok(())
    }

    /// Runs the scanner at the current lexical position.
    ///
    /// `valid` is the set of token kinds the host's parse state would accept
    /// here; the scanner never produces a kind outside it.  On success the
    /// recognized kind is recorded through [Cursor::set_result], the consumed
    /// characters are marked through [Cursor::mark_end], and the return value
    /// is true.  Otherwise the return value is false, the stack is untouched,
    /// and the host falls back to its table-driven tokenization.
    ///
    /// The cursor may be left looking ahead of the consumption mark (a
    /// newline peeks at the next content line's indentation); the host hands
    /// those characters back on the next call.
    pub fn scan<C: Cursor>(&mut self, cursor: &mut C, valid: TokenSet) -> bool {
        if valid.is_empty() {
            return false;
        }
        // Horizontal whitespace is measured exactly once, whether it turns
        // out to be a line's trailing padding (before a newline) or the next
        // line's indentation (before an indent or dedent).  Repeat calls at
        // the same position remeasure from the host's cursor, which still
        // sits on the unconsumed whitespace.
        let (column, next) = self.measure(cursor);
        if valid.contains(TokenSet::NEWLINE) && matches!(next, Some('\n' | '\r')) {
            scan_newline(cursor);
            return true;
        }
        if valid.intersects(TokenSet::INDENT | TokenSet::DEDENT) {
            let width = match next {
                // A blank line or the end of input closes every open block.
                Some('\n' | '\r') | None => 0,
                Some(_) => column,
            };
            return self.scan_indentation(cursor, valid, width);
        }
        false
    }

    /// Compares the current line's measured `width` against the innermost
    /// open level and emits at most one indent or dedent.
    fn scan_indentation<C: Cursor>(&mut self, cursor: &mut C, valid: TokenSet, width: u8) -> bool {
        let top = self.top();
        if width > top {
            if valid.contains(TokenSet::INDENT) {
                self.stack.push(width);
                // The measured whitespace becomes the indent token.
                cursor.mark_end();
                cursor.set_result(ScanToken::Indent);
                return true;
            }
        } else if width < top && valid.contains(TokenSet::DEDENT) {
            let below = match self.stack.len() {
                0 | 1 => 0,
                n => self.stack[n - 2],
            };
            if width > below {
                // `width` matches no open level.
                if self.options.mismatch == Mismatch::Strict {
                    return false;
                }
                if let Some(innermost) = self.stack.last_mut() {
                    *innermost = width;
                }
            } else {
                self.stack.pop();
            }
            // Dedents are zero-width; further pops happen at this same
            // position on later calls.
            cursor.set_result(ScanToken::Dedent);
            return true;
        }
        false
    }

    /// Advances the lookahead (but not the consumption mark) over spaces and
    /// tabs, returning the column reached and the first character beyond the
    /// whitespace.
    fn measure<C: Cursor>(&self, cursor: &mut C) -> (u8, Option<char>) {
        let tab = u32::from(self.options.tab_width.max(1));
        let max = u32::from(MAX_WIDTH);
        let mut column = 0u32;
        loop {
            let next = cursor.lookahead();
            match next {
                Some(' ') => column = (column + 1).min(max),
                Some('\t') => column = (column - column % tab + tab).min(max),
                _ => return (column as u8, next),
            }
            cursor.advance();
        }
    }
}

/// Consumes a line terminator and every following blank line as a single
/// newline token, leaving the next content line's leading whitespace as
/// unconsumed lookahead.
fn scan_newline<C: Cursor>(cursor: &mut C) {
    eat_line_end(cursor);
    cursor.mark_end();
    loop {
        while matches!(cursor.lookahead(), Some(' ' | '\t')) {
            cursor.advance();
        }
        match cursor.lookahead() {
            Some('\n' | '\r') => {
                eat_line_end(cursor);
                cursor.mark_end();
            }
            _ => break,
        }
    }
    cursor.set_result(ScanToken::Newline);
}

/// Consumes `\n`, `\r\n`, or a lone `\r`.
fn eat_line_end<C: Cursor>(cursor: &mut C) {
    if cursor.lookahead() == Some('\r') {
        cursor.advance();
    }
    if cursor.lookahead() == Some('\n') {
        cursor.advance();
    }
}
