use crate::coords::{CoordsError, Vertex, coord_to_point, format_point, parse_point, point_to_coord};
use crate::field::{Field, MAX_SIZE, MIN_SIZE, Move, is_valid_size};

#[test]
fn round_trip_all_sizes() {
  for size in MIN_SIZE..MAX_SIZE {
    for row in 1..=size {
      for col in 1..=size {
        let vertex = point_to_coord(Move::Put(coord_to_point(row, col, size)), size);
        assert_eq!(vertex, Vertex::Point { row, col });
        let text = format_point(vertex).unwrap();
        assert_eq!(parse_point(&text, size), Ok(vertex), "{} on {}", text, size);
      }
    }
  }
}

#[test]
fn letters_skip_i() {
  assert_eq!(format_point(Vertex::Point { row: 1, col: 8 }).unwrap(), "H1");
  assert_eq!(format_point(Vertex::Point { row: 1, col: 9 }).unwrap(), "J1");
  assert_eq!(parse_point("j3", 9), Ok(Vertex::Point { row: 3, col: 9 }));
  assert_eq!(parse_point("H3", 9), Ok(Vertex::Point { row: 3, col: 8 }));
}

#[test]
fn pass_in_any_case() {
  assert_eq!(parse_point("pass", 5), Ok(Vertex::Pass));
  assert_eq!(parse_point("PASS", 5), Ok(Vertex::Pass));
  assert_eq!(parse_point("PaSs", 5), Ok(Vertex::Pass));
  assert_eq!(format_point(Vertex::Pass).unwrap(), "PASS");
  assert_eq!(point_to_coord(Move::Pass, 5), Vertex::Pass);
  assert_eq!(Vertex::Pass.to_move(5), Move::Pass);
}

#[test]
fn invalid_points() {
  for text in ["i3", "13", "", "a", "a0", "a-1", "ax", "?4", "é2"] {
    assert!(
      matches!(parse_point(text, 9), Err(CoordsError::InvalidPoint(_))),
      "{}",
      text
    );
  }
}

#[test]
fn off_board_points() {
  assert_eq!(parse_point("f1", 5), Err(CoordsError::OffBoard("f1".to_string())));
  assert_eq!(parse_point("a6", 5), Err(CoordsError::OffBoard("a6".to_string())));
  assert!(parse_point("e5", 5).is_ok());
}

#[test]
fn huge_rows_are_off_board() {
  assert_eq!(parse_point("a10", 9), Err(CoordsError::OffBoard("a10".to_string())));
  assert_eq!(
    parse_point("a4294967296", 9),
    Err(CoordsError::OffBoard("a4294967296".to_string()))
  );
  assert_eq!(
    parse_point("A99999999999", 9),
    Err(CoordsError::OffBoard("a99999999999".to_string()))
  );
}

#[test]
fn bad_board_size() {
  assert_eq!(parse_point("a1", 1), Err(CoordsError::BoardSize(1)));
  assert_eq!(parse_point("a1", MAX_SIZE), Err(CoordsError::BoardSize(MAX_SIZE)));
  assert_eq!(parse_point("a1", 26), Err(CoordsError::BoardSize(26)));
  for size in 0..30 {
    assert_eq!(parse_point("a1", size).is_ok(), is_valid_size(size), "{}", size);
  }
}

#[test]
fn format_out_of_range() {
  assert_eq!(
    format_point(Vertex::Point { row: 25, col: 1 }),
    Err(CoordsError::OutOfRange { row: 25, col: 1 })
  );
  assert_eq!(
    format_point(Vertex::Point { row: 1, col: 0 }),
    Err(CoordsError::OutOfRange { row: 1, col: 0 })
  );
}

#[test]
fn vertices_follow_field_rows_and_cols() {
  let field = Field::new(6);
  for pos in field.empty_points() {
    assert_eq!(
      point_to_coord(Move::Put(pos), field.size),
      Vertex::Point {
        row: field.to_row(pos),
        col: field.to_col(pos),
      }
    );
  }
  assert_eq!(point_to_coord(Move::Put(field.to_pos(1, 6)), 6), Vertex::Point { row: 1, col: 6 });
  assert_eq!(point_to_coord(Move::Put(field.to_pos(6, 1)), 6), Vertex::Point { row: 6, col: 1 });
}
