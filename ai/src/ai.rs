use ninuki_field::{
  field::{Field, Move},
  player::Player,
};

pub trait AI {
  /// Chooses a move for `player` on the current position. Returns
  /// `Move::Pass` when there is nothing to play.
  fn get_move(&mut self, field: &Field, player: Player) -> Move;
}

impl<T: AI> AI for &mut T {
  fn get_move(&mut self, field: &Field, player: Player) -> Move {
    (*self).get_move(field, player)
  }
}

impl<T: AI + ?Sized> AI for Box<T> {
  fn get_move(&mut self, field: &Field, player: Player) -> Move {
    (**self).get_move(field, player)
  }
}
