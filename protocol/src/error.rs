use ninuki_field::coords::CoordsError;
use strum::Display;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum IllegalReason {
  #[strum(serialize = "wrong color")]
  WrongColor,
  #[strum(serialize = "not a legal move")]
  NotLegal,
  #[strum(serialize = "rejected by the board")]
  Rejected,
}

/// Everything a command can fail with. All variants but `Fault` are
/// reported to the controller as `? <message>` and the session goes on; a
/// `Fault` ends the command loop.
#[derive(Error, Debug)]
pub enum GtpError {
  #[error("{usage}")]
  ArgumentCount { usage: &'static str },
  #[error("Unknown command")]
  UnknownCommand,
  #[error(transparent)]
  InvalidCoordinate(#[from] CoordsError),
  #[error("illegal move: \"{mv}\" ({reason})")]
  IllegalMove { mv: String, reason: IllegalReason },
  #[error("{0}")]
  Syntax(String),
  #[error("handler fault: {0:#}")]
  Fault(anyhow::Error),
}

impl GtpError {
  pub fn is_recoverable(&self) -> bool {
    !matches!(self, GtpError::Fault(_))
  }
}
