//! Directional scans over the padded board: five-in-a-row detection and the
//! bracketed-run probe.

use crate::cell::Cell;
use crate::field::{self, Field, Pos};
use crate::player::Player;
use strum::{Display, EnumIter, IntoEnumIterator};

pub const WIN_LENGTH: u32 = 5;

/// A straight run of `count` on-board cells starting at `start`, advancing
/// by `step` each time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Line {
  pub start: Pos,
  pub step: Pos,
  pub count: u32,
}

impl Line {
  pub fn positions(self) -> impl Iterator<Item = Pos> {
    (0..self.count as Pos).map(move |i| self.start + i * self.step)
  }
}

/// Every maximal horizontal, vertical, diagonal and anti-diagonal line of a
/// board of the given size. Each on-board cell lies on exactly one line of
/// each family.
pub fn lines(size: u32) -> impl Iterator<Item = Line> {
  let stride = field::stride(size);
  let horizontal = (1..=size).map(move |row| Line {
    start: field::to_pos(size, row, 1),
    step: 1,
    count: size,
  });
  let vertical = (1..=size).map(move |col| Line {
    start: field::to_pos(size, 1, col),
    step: stride,
    count: size,
  });
  // Up and to the right: from the bottom row, then from the left column.
  let diagonal = (1..=size)
    .map(move |col| Line {
      start: field::to_pos(size, 1, col),
      step: stride + 1,
      count: size - col + 1,
    })
    .chain((2..=size).map(move |row| Line {
      start: field::to_pos(size, row, 1),
      step: stride + 1,
      count: size - row + 1,
    }));
  // Up and to the left: from the bottom row, then from the right column.
  let anti_diagonal = (1..=size)
    .map(move |col| Line {
      start: field::to_pos(size, 1, col),
      step: stride - 1,
      count: col,
    })
    .chain((2..=size).map(move |row| Line {
      start: field::to_pos(size, row, size),
      step: stride - 1,
      count: size - row + 1,
    }));
  horizontal.chain(vertical).chain(diagonal).chain(anti_diagonal)
}

/// Walks the line and reports the player owning the first run of
/// `WIN_LENGTH` equal stones.
pub fn find_run(field: &Field, line: Line) -> Option<Player> {
  let mut current = Cell::Empty;
  let mut run = 0u32;
  for pos in line.positions() {
    let cell = field.cell(pos);
    if cell != current {
      current = cell;
      run = 1;
    } else {
      run += 1;
    }
    if run == WIN_LENGTH
      && let Some(player) = current.get_player()
    {
      return Some(player);
    }
  }
  None
}

pub fn five_in_row(field: &Field) -> Option<Player> {
  lines(field.size).find_map(|line| find_run(field, line))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, EnumIter)]
pub enum Direction {
  #[strum(serialize = "north")]
  N,
  #[strum(serialize = "south")]
  S,
  #[strum(serialize = "west")]
  W,
  #[strum(serialize = "east")]
  E,
  #[strum(serialize = "north-west")]
  NW,
  #[strum(serialize = "north-east")]
  NE,
  #[strum(serialize = "south-west")]
  SW,
  #[strum(serialize = "south-east")]
  SE,
}

impl Direction {
  #[inline]
  pub fn step(self, size: u32, pos: Pos) -> Pos {
    match self {
      Direction::N => field::n(size, pos),
      Direction::S => field::s(size, pos),
      Direction::W => field::w(pos),
      Direction::E => field::e(pos),
      Direction::NW => field::nw(size, pos),
      Direction::NE => field::ne(size, pos),
      Direction::SW => field::sw(size, pos),
      Direction::SE => field::se(size, pos),
    }
  }
}

/// Counts the opponent stones between `origin` and the nearest stone of
/// `player` in `direction`. Returns `None` unless at least one opponent stone
/// is closed off by a friendly one; an empty or border cell ends the walk.
///
/// `origin` must be an on-board position: the border ring then stops the
/// walk before it can leave the array.
pub fn probe(field: &Field, origin: Pos, direction: Direction, player: Player) -> Option<u32> {
  let mut pos = direction.step(field.size, origin);
  let mut count = 0u32;
  loop {
    match field.cell(pos).get_player() {
      Some(p) if p == player => return if count > 0 { Some(count) } else { None },
      Some(_) => count += 1,
      None => return None,
    }
    pos = direction.step(field.size, pos);
  }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NeighborReport {
  pub player: Player,
  pub runs: Vec<(Direction, Option<u32>)>,
}

impl NeighborReport {
  pub fn total(&self) -> u32 {
    self.runs.iter().filter_map(|&(_, run)| run).sum()
  }
}

/// Probes all eight directions from `origin` on behalf of the stone standing
/// there, or of the side to move when the point is empty.
pub fn check_neighbors(field: &Field, origin: Pos) -> NeighborReport {
  let player = field.cell(origin).get_player().unwrap_or(field.current_player);
  let runs = Direction::iter()
    .map(|direction| {
      let run = probe(field, origin, direction, player);
      log::debug!("Probe {} from {}: {:?}.", direction, origin, run);
      (direction, run)
    })
    .collect();
  NeighborReport { player, runs }
}
