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

//! External indentation scanner for the props language.
//!
//! props block structure is indentation-sensitive, which a context-free
//! grammar cannot express on its own.  The host parser therefore delegates
//! three token kinds to this crate: [ScanToken::Indent] when a line opens a
//! deeper block, [ScanToken::Dedent] when a line closes one, and
//! [ScanToken::Newline] for a logical line break.  Everything else about the
//! language stays in the host's generated tables.
//!
//! The host drives the scanner through a narrow contract: before each scan it
//! restores the scanner's state from a serialized snapshot (the host explores
//! speculative parse branches and may backtrack, so every branch keeps its own
//! snapshot), then calls [Scanner::scan] with a forward-only [Cursor] over the
//! input and the set of token kinds its current parse state would accept, and
//! finally snapshots the state again with [Scanner::serialize].
//!
//! [ScanToken::Indent]: token::ScanToken::Indent
//! [ScanToken::Dedent]: token::ScanToken::Dedent
//! [ScanToken::Newline]: token::ScanToken::Newline
//! [Scanner::scan]: scan::Scanner::scan
//! [Scanner::serialize]: scan::Scanner::serialize
//! [Cursor]: cursor::Cursor

pub mod cursor;
pub mod scan;
pub mod token;
