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

//! A binary program used to run perft on a position and print a per-root-move
//! divide breakdown.
//!
//! # Arguments
//!
//! Each argument is given to the binary in order, as follows:
//! 1. The depth to search to.
//! 1. (optional) The FEN of the position to search from. If omitted, the
//!    standard starting position is used.

use chesscore::perft::perft_divide;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

struct Args {
    depth: u8,
    fen: String,
}

fn main() -> Result<(), ()> {
    let Ok(args) = parse_args() else {
        println!("usage: perft <depth> [fen]");
        return Err(());
    };

    let total = perft_divide(&args.fen, args.depth);
    println!("total: {total}");

    Ok(())
}

/// Attempt to parse the command-line arguments.
fn parse_args() -> Result<Args, ()> {
    let args = std::env::args().collect::<Vec<String>>();
    if !(2..=3).contains(&args.len()) {
        return Err(());
    }

    let depth = args[1].parse().map_err(|_| ())?;
    let fen = match args.get(2) {
        Some(f) => f.clone(),
        None => STARTPOS.to_string(),
    };

    Ok(Args { depth, fen })
}
