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

//! The host lexer handle.
//!
//! During a scan the host lends the scanner a cursor over the remaining
//! input.  The cursor is forward-only: the scanner may look ahead as far as
//! it likes, but only the characters before the consumption mark become part
//! of the token it reports.  Lookahead past the mark is speculative and the
//! host will hand it back on the next call.

use crate::token::ScanToken;

/// Forward-only view of the input at the current lexical position.
pub trait Cursor {
    /// Returns the character at the lookahead position, or `None` at end of
    /// input.
    fn lookahead(&self) -> Option<char>;

    /// Moves the lookahead position forward by one character.  Does nothing
    /// at end of input.
    fn advance(&mut self);

    /// Marks everything before the lookahead position as consumed by the
    /// token being recognized.
    fn mark_end(&mut self);

    /// Records the kind of the recognized token.
    fn set_result(&mut self, token: ScanToken);
}

/// [Cursor] over an in-memory string.
///
/// The host runtime supplies its own cursor; this one serves in-process
/// embedders and the test suite.  After a scan, [consumed_len](Self::consumed_len)
/// says how far the caller should step before the next call, and
/// [result](Self::result) reports the recognized token kind, if any.
pub struct StrCursor<'a> {
    input: &'a str,
    offset: usize,
    mark: usize,
    result: Option<ScanToken>,
}

impl<'a> StrCursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            mark: 0,
            result: None,
        }
    }

    /// Returns the consumed prefix of the input.
    pub fn consumed(&self) -> &'a str {
        &self.input[..self.mark]
    }

    /// Returns the length in bytes of the consumed prefix.
    pub fn consumed_len(&self) -> usize {
        self.mark
    }

    /// Returns the token kind recorded by the scan, if any.
    pub fn result(&self) -> Option<ScanToken> {
        self.result
    }
}

impl Cursor for StrCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.lookahead() {
            self.offset += c.len_utf8();
        }
    }

    fn mark_end(&mut self) {
        self.mark = self.offset;
    }

    fn set_result(&mut self, token: ScanToken) {
        self.result = Some(token);
    }
}
