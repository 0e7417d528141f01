use crate::request::{Request, parse_line};

#[test]
fn blank_and_comment_lines() {
  assert_eq!(parse_line(""), None);
  assert_eq!(parse_line("\n"), None);
  assert_eq!(parse_line(" \t\r\n"), None);
  assert_eq!(parse_line("# play b a1\n"), None);
}

#[test]
fn name_and_args() {
  assert_eq!(
    parse_line("play  b\tA1\r\n"),
    Some(Request {
      name: "play",
      args: vec!["b", "A1"],
    })
  );
  assert_eq!(
    parse_line("list_commands\n"),
    Some(Request {
      name: "list_commands",
      args: Vec::new(),
    })
  );
}

#[test]
fn leading_number_is_dropped() {
  assert_eq!(
    parse_line("12 genmove w\n"),
    Some(Request {
      name: "genmove",
      args: vec!["w"],
    })
  );
  assert_eq!(
    parse_line("3name"),
    Some(Request {
      name: "name",
      args: Vec::new(),
    })
  );
  assert_eq!(parse_line("42\n"), None);
}
