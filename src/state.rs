/*
  Chesscore, a chess move-generation and perft engine.
  Copyright (C) 2022 The Chesscore Authors

  Chesscore is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Chesscore is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The state-snapshot stack used to make and unmake moves in place.
//!
//! A `Board` owns one of these instead of being cloned per ply. Pushing and
//! popping a frame is a pointer-bump into a fixed-capacity array, so
//! `make`/`unmake` never touch the heap.

use super::{Bitboard, CastleRights, Color, Piece, Square};

/// The maximum number of plies a single `Board` can have in flight at once
/// (i.e. the deepest a `make` without a matching `unmake` can nest). Comfortably
/// exceeds the depths exercised by this crate's perft test suite.
pub const MAX_PLY: usize = 256;

#[derive(Clone, Copy, Debug)]
/// Every piece of irreversible state needed to undo one move. Plain old data:
/// no pointers, no allocation, trivially `Copy`.
pub struct Snapshot {
    pub(crate) sides: [Bitboard; 2],
    pub(crate) pieces: [Bitboard; Piece::NUM_TYPES],
    pub(crate) player: Color,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) castle_rights: CastleRights,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Snapshot {
    const EMPTY: Snapshot = Snapshot {
        sides: [Bitboard::EMPTY; 2],
        pieces: [Bitboard::EMPTY; Piece::NUM_TYPES],
        player: Color::White,
        en_passant_square: None,
        castle_rights: CastleRights::NO_RIGHTS,
        halfmove_clock: 0,
        fullmove_number: 1,
    };
}

/// A fixed-capacity stack of `Snapshot`s, sized to `MAX_PLY`.
///
/// `push` and `pop` are pointer-bump operations (`len` increments or
/// decrements); there is no per-move heap allocation anywhere in this type.
#[derive(Clone, Debug)]
pub(crate) struct SnapshotStack {
    frames: [Snapshot; MAX_PLY],
    len: usize,
}

impl SnapshotStack {
    pub(crate) fn new() -> SnapshotStack {
        SnapshotStack {
            frames: [Snapshot::EMPTY; MAX_PLY],
            len: 0,
        }
    }

    #[inline(always)]
    /// Push a snapshot onto the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack is already at `MAX_PLY` depth. This is a
    /// precondition violation (a caller nesting `make` far deeper than any
    /// sane search), not a runtime condition the core needs to recover from.
    pub(crate) fn push(&mut self, snap: Snapshot) {
        assert!(self.len < MAX_PLY, "state stack exceeded MAX_PLY depth");
        self.frames[self.len] = snap;
        self.len += 1;
    }

    #[inline(always)]
    /// Pop and return the most recently pushed snapshot.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty: an `unmake` with no matching `make` is a
    /// precondition violation.
    pub(crate) fn pop(&mut self) -> Snapshot {
        assert!(self.len > 0, "unmake called with an empty state stack");
        self.len -= 1;
        self.frames[self.len]
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
