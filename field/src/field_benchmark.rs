#[macro_use]
extern crate criterion;

use criterion::{Bencher, Criterion, black_box};
use ninuki_field::construct_field::construct_moves;
use ninuki_field::field::{Field, Move, Pos};
use ninuki_field::player::Player;
use ninuki_field::scan::{check_neighbors, five_in_row};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_xoshiro::Xoshiro256PlusPlus;

const SEED_1: u64 = 3;
const SEED_2: u64 = 5;
const SEED_3: u64 = 7;

fn random_game(bencher: &mut Bencher, size: u32, seed: u64) {
  let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
  let mut moves = Field::new(size).empty_points();
  moves.shuffle(&mut rng);
  bencher.iter(|| {
    let mut field = Field::new(size);
    for &pos in black_box(&moves) {
      let player = field.current_player;
      field.play_move(Move::Put(pos), player);
      if five_in_row(&field).is_some() {
        break;
      }
    }
    field
  });
}

fn random_game_1(c: &mut Criterion) {
  c.bench_function("random_game_1", |bencher| random_game(bencher, 19, SEED_1));
}

fn random_game_2(c: &mut Criterion) {
  c.bench_function("random_game_2", |bencher| random_game(bencher, 19, SEED_2));
}

fn random_game_3(c: &mut Criterion) {
  c.bench_function("random_game_3", |bencher| random_game(bencher, 19, SEED_3));
}

fn neighbors(bencher: &mut Bencher, size: u32, moves: Vec<(Player, Pos)>) {
  let mut field = Field::new(size);
  for (player, pos) in moves {
    field.play_move(Move::Put(pos), player);
  }
  let points = field.empty_points();
  bencher.iter(|| {
    black_box(&points)
      .iter()
      .map(|&pos| check_neighbors(&field, pos).total())
      .sum::<u32>()
  });
}

fn crowded_neighbors(c: &mut Criterion) {
  let (size, moves) = construct_moves(
    "
    X.X.X.X
    .OOOOO.
    XO.O.OX
    .O.X.O.
    XO.O.OX
    .OOOOO.
    X.X.X.X
    ",
  );
  c.bench_function("crowded_neighbors", |bencher| neighbors(bencher, size, moves.clone()));
}

criterion_group!(random_games, random_game_1, random_game_2, random_game_3);
criterion_group!(probes, crowded_neighbors);
criterion_main!(random_games, probes);
