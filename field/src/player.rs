use std::fmt::{Display, Formatter, Result};
use strum::EnumString;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, EnumString)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Player {
  #[default]
  #[strum(serialize = "b", serialize = "black")]
  Black,
  #[strum(serialize = "w", serialize = "white")]
  White,
}

impl Player {
  #[inline]
  pub fn next(self) -> Player {
    match self {
      Player::Black => Player::White,
      Player::White => Player::Black,
    }
  }
}

impl Display for Player {
  fn fmt(&self, f: &mut Formatter) -> Result {
    match *self {
      Player::Black => write!(f, "black"),
      Player::White => write!(f, "white"),
    }
  }
}
