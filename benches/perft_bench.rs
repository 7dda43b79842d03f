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

//! Wall-clock benchmarks for perft, covering both move generation throughput
//! and the make/unmake/check-detection loop that perft exercises.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chesscore::Board;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_movegen(c: &mut Criterion) {
    let start = Board::from_fen(STARTPOS).unwrap();
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();

    c.bench_function("generate_pseudo_legal startpos", |b| {
        b.iter(|| black_box(start.generate_pseudo_legal()));
    });

    c.bench_function("generate_pseudo_legal kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_pseudo_legal()));
    });
}

fn bench_perft(c: &mut Criterion) {
    c.bench_function("perft startpos depth 4", |b| {
        b.iter(|| black_box(chesscore::perft::perft(STARTPOS, 4)));
    });

    c.bench_function("perft kiwipete depth 3", |b| {
        b.iter(|| black_box(chesscore::perft::perft(KIWIPETE, 3)));
    });
}

criterion_group!(benches, bench_movegen, bench_perft);
criterion_main!(benches);
