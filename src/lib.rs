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

//! A bitboard move generator and perft driver.
//!
//! The core contract is four operations: [`movegen::generate_pseudo_legal`],
//! [`Board::make`], [`Board::unmake`], and [`Board::in_check`]. Everything
//! else (FEN parsing, the `perft` binary, UCI move text) is ambient
//! scaffolding layered on top of that core.

// Many module elements are re-exported to make names more ergonomic to access.

mod bitboard;
pub use crate::bitboard::Bitboard;

mod board;
pub use board::Board;

mod castling;
use castling::CastleRights;

mod color;
pub use color::Color;

mod direction;
use direction::Direction;

mod magic;
pub use magic::MAGIC;

pub mod movegen;

mod moves;
pub use moves::Move;

pub mod perft;

mod piece;
pub use piece::Piece;

mod square;
pub use square::Square;

mod state;
pub use state::Snapshot;
