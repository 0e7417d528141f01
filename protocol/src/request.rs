#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Request<'a> {
  pub name: &'a str,
  pub args: Vec<&'a str>,
}

/// Splits a protocol line into a command name and its arguments. Blank and
/// comment lines yield `None`; a leading regression-test number is dropped.
pub fn parse_line(line: &str) -> Option<Request<'_>> {
  if line.trim_matches([' ', '\r', '\t', '\n']).is_empty() || line.starts_with('#') {
    return None;
  }
  let line = line.trim_start_matches(|c: char| c.is_ascii_digit());
  let mut tokens = line.split_whitespace();
  let name = tokens.next()?;
  Some(Request {
    name,
    args: tokens.collect(),
  })
}
