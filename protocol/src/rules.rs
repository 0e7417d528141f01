//! Game-level questions answered on top of the field: who won, which moves
//! are legal, and playing or generating a move with full validation.

use crate::error::{GtpError, IllegalReason};
use ninuki_ai::ai::AI;
use ninuki_field::{
  coords::{Vertex, format_point, parse_point, point_to_coord},
  field::{Field, Move},
  player::Player,
  scan::five_in_row,
};
use std::collections::BTreeSet;
use strum::Display;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum GameResult {
  #[strum(serialize = "black")]
  BlackWins,
  #[strum(serialize = "white")]
  WhiteWins,
  #[strum(serialize = "draw")]
  Draw,
  #[strum(serialize = "unknown")]
  Undecided,
}

impl GameResult {
  pub fn is_decided(self) -> bool {
    self != GameResult::Undecided
  }
}

pub fn final_result(field: &Field) -> GameResult {
  match five_in_row(field) {
    Some(Player::Black) => GameResult::BlackWins,
    Some(Player::White) => GameResult::WhiteWins,
    None if field.empty_points().is_empty() => GameResult::Draw,
    None => GameResult::Undecided,
  }
}

/// Formats a move produced by the engine itself; a failure here is a bug,
/// not bad input.
pub fn format_move(field: &Field, mv: Move) -> Result<String, GtpError> {
  format_point(point_to_coord(mv, field.size)).map_err(|e| GtpError::Fault(e.into()))
}

/// Sorted legal points for `player`. Empty once the game is decided.
pub fn legal_moves(field: &Field, player: Player) -> Result<BTreeSet<String>, GtpError> {
  if final_result(field).is_decided() {
    return Ok(BTreeSet::new());
  }
  field
    .legal_moves(player)
    .into_iter()
    .map(|pos| format_move(field, Move::Put(pos)))
    .collect()
}

pub fn play_move(field: &mut Field, player: Player, text: &str) -> Result<(), GtpError> {
  let vertex = parse_point(text, field.size)?;
  if vertex == Vertex::Pass {
    field.play_move(Move::Pass, player);
    return Ok(());
  }
  let mv_text = format_point(vertex)?;
  let illegal = |reason| GtpError::IllegalMove {
    mv: format!("{} {}", player, mv_text),
    reason,
  };
  if field.current_player != player {
    return Err(illegal(IllegalReason::WrongColor));
  }
  if !legal_moves(field, player)?.contains(&mv_text) {
    return Err(illegal(IllegalReason::NotLegal));
  }
  if !field.play_move(vertex.to_move(field.size), player) {
    return Err(illegal(IllegalReason::Rejected));
  }
  log::debug!("Move: {}\nBoard:\n{}", mv_text, field);
  Ok(())
}

/// Asks the AI for a move and plays it. Answers `resign` or `pass` instead
/// when the game is already over.
pub fn generate_move<A: AI>(field: &mut Field, ai: &mut A, player: Player) -> Result<String, GtpError> {
  match final_result(field) {
    GameResult::BlackWins | GameResult::WhiteWins => return Ok("resign".to_string()),
    GameResult::Draw => return Ok("pass".to_string()),
    GameResult::Undecided => {}
  }
  let mv = ai.get_move(field, player);
  let mv_text = format_move(field, mv)?;
  if !field.play_move(mv, player) {
    return Err(GtpError::IllegalMove {
      mv: format!("{} {}", player, mv_text),
      reason: IllegalReason::Rejected,
    });
  }
  log::debug!("Generated move: {}\nBoard:\n{}", mv_text, field);
  Ok(mv_text)
}
