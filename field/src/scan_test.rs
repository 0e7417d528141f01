use crate::construct_field::construct_field;
use crate::field::{Field, Move};
use crate::player::Player;
use crate::scan::{Direction, check_neighbors, five_in_row, lines, probe};
use std::collections::HashMap;

#[test]
fn lines_cover_each_cell_once_per_family() {
  for size in 2..=13 {
    let mut hits = HashMap::new();
    for line in lines(size) {
      for pos in line.positions() {
        assert!(crate::field::is_on_board(size, pos), "size {} pos {}", size, pos);
        *hits.entry((pos, line.step)).or_insert(0u32) += 1;
      }
    }
    assert_eq!(hits.len() as u32, size * size * 4);
    assert!(hits.values().all(|&count| count == 1));
  }
}

#[test]
fn empty_field_has_no_winner() {
  assert_eq!(five_in_row(&Field::new(7)), None);
}

#[test]
fn horizontal_five() {
  let field = construct_field(
    "
    .......
    .......
    .OOOO..
    .......
    ..XXXXX
    .......
    .......
    ",
  );
  assert_eq!(five_in_row(&field), Some(Player::Black));
}

#[test]
fn vertical_five_at_edge() {
  let field = construct_field(
    "
    ......O
    ......O
    ......O
    ......O
    ......O
    XXXX...
    .......
    ",
  );
  assert_eq!(five_in_row(&field), Some(Player::White));
}

#[test]
fn diagonal_five() {
  let field = construct_field(
    "
    ......
    .....X
    ....X.
    ...X..
    ..X...
    .X....
    ",
  );
  assert_eq!(five_in_row(&field), Some(Player::Black));
}

#[test]
fn anti_diagonal_five_in_corner() {
  let field = construct_field(
    "
    O....
    .O...
    ..O..
    ...O.
    ....O
    ",
  );
  assert_eq!(five_in_row(&field), Some(Player::White));
}

#[test]
fn broken_runs_do_not_win() {
  let field = construct_field(
    "
    XXXX.XXXX
    .........
    OOOOXOOOO
    .........
    X........
    .X.......
    ..X......
    ...X.....
    .....X...
    ",
  );
  assert_eq!(five_in_row(&field), None);
}

#[test]
fn run_does_not_wrap_between_rows() {
  let field = construct_field(
    "
    .....
    .....
    .....
    XX...
    ..XXX
    ",
  );
  assert_eq!(five_in_row(&field), None);
}

#[test]
fn six_in_a_row_wins() {
  let field = construct_field(
    "
    ......
    ......
    ......
    ......
    ......
    XXXXXX
    ",
  );
  assert_eq!(five_in_row(&field), Some(Player::Black));
}

#[test]
fn probe_finds_bracketed_run() {
  let field = construct_field(
    "
    .....
    .....
    XOOX.
    .....
    .....
    ",
  );
  let origin = field.to_pos(3, 1);
  assert_eq!(probe(&field, origin, Direction::E, Player::Black), Some(2));
  assert_eq!(probe(&field, origin, Direction::W, Player::Black), None);
  assert_eq!(probe(&field, origin, Direction::N, Player::Black), None);
}

#[test]
fn probe_open_run_and_border() {
  let field = construct_field(
    "
    .....
    .....
    XOO..
    .....
    ...OO
    ",
  );
  // Ends on an empty point.
  assert_eq!(probe(&field, field.to_pos(3, 1), Direction::E, Player::Black), None);
  // Ends on the border ring.
  assert_eq!(probe(&field, field.to_pos(1, 3), Direction::E, Player::Black), None);
  // Adjacent friendly stone, nothing in between.
  assert_eq!(probe(&field, field.to_pos(1, 4), Direction::E, Player::White), None);
}

#[test]
fn check_neighbors_sums_all_directions() {
  let mut field = construct_field(
    "
    X.X.X
    .OOO.
    XO.OX
    .OOO.
    X.X.X
    ",
  );
  let centre = field.to_pos(3, 3);
  assert_eq!(field.current_player, Player::White);
  let report = check_neighbors(&field, centre);
  assert_eq!(report.player, Player::White);
  assert_eq!(report.total(), 0);

  field.current_player = Player::Black;
  let report = check_neighbors(&field, centre);
  assert_eq!(report.player, Player::Black);
  assert_eq!(report.runs.len(), 8);
  assert!(report.runs.iter().all(|&(_, run)| run == Some(1)));
  assert_eq!(report.total(), 8);
}

#[test]
fn check_neighbors_uses_stone_on_origin() {
  let mut field = construct_field(
    "
    .....
    .....
    XOOO.
    .....
    .....
    ",
  );
  assert!(field.play_move(Move::Put(field.to_pos(3, 5)), Player::Black));
  field.current_player = Player::White;
  let report = check_neighbors(&field, field.to_pos(3, 1));
  assert_eq!(report.player, Player::Black);
  assert_eq!(report.total(), 3);
  assert_eq!(
    report.runs.iter().find(|&&(d, _)| d == Direction::E),
    Some(&(Direction::E, Some(3)))
  );
}
