use crate::ai::AI;
use ninuki_field::{
  field::{Field, Move},
  player::Player,
};
use rand::{Rng, seq::IndexedRandom};

/// Plays a uniformly random legal point.
pub struct RandomAI<R> {
  rng: R,
}

impl<R: Rng> RandomAI<R> {
  pub fn new(rng: R) -> Self {
    RandomAI { rng }
  }
}

impl<R: Rng> AI for RandomAI<R> {
  fn get_move(&mut self, field: &Field, player: Player) -> Move {
    let moves = field.legal_moves(player);
    match moves.choose(&mut self.rng) {
      Some(&pos) => {
        log::debug!("Random move ({}, {}) for {}.", field.to_row(pos), field.to_col(pos), player);
        Move::Put(pos)
      }
      None => {
        log::debug!("No legal moves for {}, passing.", player);
        Move::Pass
      }
    }
  }
}
