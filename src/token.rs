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

//! Token kinds shared with the host parser.
//!
//! The discriminants of [ScanToken] are an external contract: the host's
//! generated tables identify external tokens by ordinal, so the numbering
//! here must stay in lockstep with the grammar's external token list.

use bitflags::bitflags;
use enum_iterator::{Sequence, all};

/// A token kind this scanner can produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Sequence)]
#[repr(u8)]
pub enum ScanToken {
    /// Entry into a deeper indentation block.
    Indent = 0,

    /// Exit from an indentation block.  A line that closes several blocks at
    /// once yields one `Dedent` per closed block, one scan call each.
    Dedent = 1,

    /// A logical line break.  A run of blank lines collapses into a single
    /// `Newline`.
    Newline = 2,
}

bitflags! {
    /// The set of token kinds the host's current parse state would accept.
    ///
    /// The host passes one of these to every [scan](crate::scan::Scanner::scan)
    /// call; the scanner never produces a token kind outside the set.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct TokenSet: u8 {
        const INDENT = 1 << ScanToken::Indent as u8;
        const DEDENT = 1 << ScanToken::Dedent as u8;
        const NEWLINE = 1 << ScanToken::Newline as u8;
    }
}

impl From<ScanToken> for TokenSet {
    fn from(token: ScanToken) -> Self {
        Self::from_bits_truncate(1 << token as u8)
    }
}

impl TokenSet {
    /// Returns the token kinds in this set, in ordinal order.
    pub fn tokens(self) -> impl Iterator<Item = ScanToken> {
        all::<ScanToken>().filter(move |token| self.contains((*token).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ScanToken, TokenSet};

    #[test]
    fn ordinals_match_grammar() {
        assert_eq!(ScanToken::Indent as u8, 0);
        assert_eq!(ScanToken::Dedent as u8, 1);
        assert_eq!(ScanToken::Newline as u8, 2);
    }

    #[test]
    fn set_round_trips_members() {
        let set = TokenSet::NEWLINE | TokenSet::DEDENT;
        assert_eq!(
            set.tokens().collect::<Vec<_>>(),
            vec![ScanToken::Dedent, ScanToken::Newline]
        );
        assert_eq!(TokenSet::from(ScanToken::Indent), TokenSet::INDENT);
    }
}
