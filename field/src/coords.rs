//! Conversions between linear board positions, `(row, col)` pairs and GTP
//! vertices such as `C4` or `PASS`.

use crate::field::{MAX_SIZE, Move, Pos, is_valid_size, to_col, to_pos, to_row};
use std::num::IntErrorKind;
use thiserror::Error;

/// Column letters; `I` is skipped.
const COLUMN_LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Vertex {
  Pass,
  Point { row: u32, col: u32 },
}

impl Vertex {
  pub fn to_move(self, size: u32) -> Move {
    match self {
      Vertex::Pass => Move::Pass,
      Vertex::Point { row, col } => Move::Put(coord_to_point(row, col, size)),
    }
  }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum CoordsError {
  #[error("invalid point: '{0}'")]
  InvalidPoint(String),
  #[error("point off board: '{0}'")]
  OffBoard(String),
  #[error("coordinates out of range: ({row}, {col})")]
  OutOfRange { row: u32, col: u32 },
  #[error("board size out of range: {0}")]
  BoardSize(u32),
}

pub fn point_to_coord(mv: Move, size: u32) -> Vertex {
  match mv {
    Move::Pass => Vertex::Pass,
    Move::Put(pos) => Vertex::Point {
      row: to_row(size, pos),
      col: to_col(size, pos),
    },
  }
}

/// Caller guarantees `1 <= row, col <= size`.
#[inline]
pub fn coord_to_point(row: u32, col: u32, size: u32) -> Pos {
  to_pos(size, row, col)
}

pub fn format_point(vertex: Vertex) -> Result<String, CoordsError> {
  match vertex {
    Vertex::Pass => Ok("PASS".to_string()),
    Vertex::Point { row, col } => {
      if row >= MAX_SIZE || col == 0 || col >= MAX_SIZE {
        return Err(CoordsError::OutOfRange { row, col });
      }
      let letter = COLUMN_LETTERS[col as usize - 1] as char;
      Ok(format!("{}{}", letter, row))
    }
  }
}

pub fn parse_point(text: &str, size: u32) -> Result<Vertex, CoordsError> {
  if !is_valid_size(size) {
    return Err(CoordsError::BoardSize(size));
  }
  let s = text.to_lowercase();
  if s == "pass" {
    return Ok(Vertex::Pass);
  }
  let invalid = || CoordsError::InvalidPoint(s.clone());
  let mut chars = s.chars();
  let letter = chars.next().ok_or_else(invalid)?;
  if !letter.is_ascii_lowercase() || letter == 'i' {
    return Err(invalid());
  }
  let mut col = letter as u32 - 'a' as u32;
  if letter < 'i' {
    col += 1;
  }
  // Any row too large for `u32` is still a number, just not on this board.
  let row = chars.as_str().parse::<u32>().map_err(|e| match e.kind() {
    IntErrorKind::PosOverflow => CoordsError::OffBoard(s.clone()),
    _ => invalid(),
  })?;
  if row < 1 {
    return Err(invalid());
  }
  if col > size || row > size {
    return Err(CoordsError::OffBoard(s));
  }
  Ok(Vertex::Point { row, col })
}
