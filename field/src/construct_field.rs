use crate::field::{Field, Move, Pos, to_pos};
use crate::player::Player;

/// Parses a board image in the `gogui-rules_board` format: one line per row,
/// top row first, `X` for black, `O` for white and `.` for an empty point.
pub fn construct_moves(image: &str) -> (u32, Vec<(Player, Pos)>) {
  let lines = image
    .split('\n')
    .map(|line| line.trim_matches(' '))
    .filter(|line| !line.is_empty())
    .collect::<Vec<&str>>();
  let size = lines.len() as u32;
  assert!(size > 0);
  assert!(lines.iter().all(|line| line.len() as u32 == size));
  let moves = lines
    .into_iter()
    .enumerate()
    .flat_map(|(i, line)| {
      let row = size - i as u32;
      line.chars().enumerate().filter_map(move |(j, c)| {
        let player = match c {
          'X' | 'x' => Player::Black,
          'O' | 'o' => Player::White,
          _ => return None,
        };
        Some((player, to_pos(size, row, j as u32 + 1)))
      })
    })
    .collect();
  (size, moves)
}

/// Builds a field from an image. The side to move is left as after the last
/// placed stone, so tests that care set `current_player` explicitly.
pub fn construct_field(image: &str) -> Field {
  let (size, moves) = construct_moves(image);
  let mut field = Field::new(size);
  for (player, pos) in moves {
    assert!(field.play_move(Move::Put(pos), player));
  }
  field
}
