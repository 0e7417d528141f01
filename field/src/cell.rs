use crate::player::Player;

/// Content of a single cell of the padded board array.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[repr(u8)]
pub enum Cell {
  #[default]
  Empty,
  Black,
  White,
  /// Sentinel ring around the playable area.
  Border,
}

impl Cell {
  #[inline]
  pub fn from_player(player: Player) -> Cell {
    match player {
      Player::Black => Cell::Black,
      Player::White => Cell::White,
    }
  }

  #[inline]
  pub fn get_player(self) -> Option<Player> {
    match self {
      Cell::Black => Some(Player::Black),
      Cell::White => Some(Player::White),
      Cell::Empty | Cell::Border => None,
    }
  }

  #[inline]
  pub fn is_border(self) -> bool {
    self == Cell::Border
  }

  #[inline]
  pub fn is_putting_allowed(self) -> bool {
    self == Cell::Empty
  }

  #[inline]
  pub fn to_char(self) -> char {
    match self {
      Cell::Black => 'X',
      Cell::White => 'O',
      Cell::Empty => '.',
      Cell::Border => '#',
    }
  }
}
