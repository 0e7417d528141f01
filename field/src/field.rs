use crate::cell::Cell;
use crate::player::Player;
use std::fmt;

pub type Pos = usize;

pub const MIN_SIZE: u32 = 2;

/// One past the largest board side that can still be rendered as GTP
/// coordinates.
pub const MAX_SIZE: u32 = 25;

pub const DEFAULT_SIZE: u32 = 7;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
  Pass,
  Put(Pos),
}

#[inline]
pub fn is_valid_size(size: u32) -> bool {
  (MIN_SIZE..MAX_SIZE).contains(&size)
}

/// Distance between vertically adjacent cells. Neighbouring rows share one
/// guard column, so the stride is `size + 1`.
#[inline]
pub fn stride(size: u32) -> Pos {
  size as Pos + 1
}

#[inline]
pub fn length(size: u32) -> Pos {
  stride(size) * (size as Pos + 2) + 1
}

#[inline]
pub fn to_pos(size: u32, row: u32, col: u32) -> Pos {
  row as Pos * stride(size) + col as Pos
}

#[inline]
pub fn to_row(size: u32, pos: Pos) -> u32 {
  (pos / stride(size)) as u32
}

#[inline]
pub fn to_col(size: u32, pos: Pos) -> u32 {
  (pos % stride(size)) as u32
}

#[inline]
pub fn n(size: u32, pos: Pos) -> Pos {
  pos + stride(size)
}

#[inline]
pub fn s(size: u32, pos: Pos) -> Pos {
  pos - stride(size)
}

#[inline]
pub fn w(pos: Pos) -> Pos {
  pos - 1
}

#[inline]
pub fn e(pos: Pos) -> Pos {
  pos + 1
}

#[inline]
pub fn nw(size: u32, pos: Pos) -> Pos {
  n(size, w(pos))
}

#[inline]
pub fn ne(size: u32, pos: Pos) -> Pos {
  n(size, e(pos))
}

#[inline]
pub fn sw(size: u32, pos: Pos) -> Pos {
  s(size, w(pos))
}

#[inline]
pub fn se(size: u32, pos: Pos) -> Pos {
  s(size, e(pos))
}

#[inline]
pub fn is_on_board(size: u32, pos: Pos) -> bool {
  let row = to_row(size, pos);
  let col = to_col(size, pos);
  (1..=size).contains(&row) && (1..=size).contains(&col)
}

fn empty_points_vec(size: u32) -> Vec<Cell> {
  (0..length(size))
    .map(|pos| if is_on_board(size, pos) { Cell::Empty } else { Cell::Border })
    .collect()
}

/// Stone placement store: a square board padded with a ring of border
/// cells, plus the side to move.
#[derive(Clone, PartialEq, Eq)]
pub struct Field {
  pub size: u32,
  pub current_player: Player,
  pub moves: Vec<(Move, Player)>,
  points: Vec<Cell>,
}

impl Field {
  pub fn new(size: u32) -> Field {
    Field {
      size,
      current_player: Player::Black,
      moves: Vec::new(),
      points: empty_points_vec(size),
    }
  }

  pub fn reset(&mut self, size: u32) {
    log::debug!("Resetting field to size {}.", size);
    self.size = size;
    self.current_player = Player::Black;
    self.moves.clear();
    self.points = empty_points_vec(size);
  }

  #[inline]
  pub fn to_pos(&self, row: u32, col: u32) -> Pos {
    to_pos(self.size, row, col)
  }

  #[inline]
  pub fn to_row(&self, pos: Pos) -> u32 {
    to_row(self.size, pos)
  }

  #[inline]
  pub fn to_col(&self, pos: Pos) -> u32 {
    to_col(self.size, pos)
  }

  #[inline]
  pub fn length(&self) -> usize {
    self.points.len()
  }

  #[inline]
  pub fn cell(&self, pos: Pos) -> Cell {
    self.points[pos]
  }

  #[inline]
  pub fn moves_count(&self) -> usize {
    self.moves.len()
  }

  pub fn is_legal(&self, mv: Move, _player: Player) -> bool {
    match mv {
      Move::Pass => true,
      Move::Put(pos) => pos < self.length() && self.cell(pos).is_putting_allowed(),
    }
  }

  /// Places a stone (or passes) for `player` and hands the turn to the
  /// opponent. Returns `false` without touching the field when the move
  /// can't be played.
  pub fn play_move(&mut self, mv: Move, player: Player) -> bool {
    if !self.is_legal(mv, player) {
      return false;
    }
    if let Move::Put(pos) = mv {
      self.points[pos] = Cell::from_player(player);
    }
    self.moves.push((mv, player));
    self.current_player = player.next();
    true
  }

  pub fn empty_points(&self) -> Vec<Pos> {
    (1..=self.size)
      .flat_map(|row| (1..=self.size).map(move |col| (row, col)))
      .map(|(row, col)| self.to_pos(row, col))
      .filter(|&pos| self.cell(pos).is_putting_allowed())
      .collect()
  }

  pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
    self
      .empty_points()
      .into_iter()
      .filter(|&pos| self.is_legal(Move::Put(pos), player))
      .collect()
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for row in (1..=self.size).rev() {
      for col in 1..=self.size {
        write!(f, "{}", self.cell(self.to_pos(row, col)).to_char())?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

impl fmt::Debug for Field {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self)
  }
}
