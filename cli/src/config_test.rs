use crate::config::{Config, command, parse_config};
use ninuki_field::field::{DEFAULT_SIZE, MAX_SIZE};

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
  command()
    .try_get_matches_from(std::iter::once("ninuki").chain(args.iter().copied()))
    .map(|matches| parse_config(&matches))
}

#[test]
fn defaults() {
  assert_eq!(
    parse(&[]).unwrap(),
    Config {
      size: DEFAULT_SIZE,
      seed: None,
      debug: false,
    }
  );
}

#[test]
fn all_options() {
  assert_eq!(
    parse(&["-s", "9", "--seed", "3", "-d"]).unwrap(),
    Config {
      size: 9,
      seed: Some(3),
      debug: true,
    }
  );
  assert_eq!(parse(&["--size", "24"]).unwrap().size, 24);
}

#[test]
fn size_out_of_range() {
  assert!(parse(&["--size", "1"]).is_err());
  let max = MAX_SIZE.to_string();
  assert!(parse(&["--size", max.as_str()]).is_err());
  assert!(parse(&["--size", "x"]).is_err());
}

#[test]
fn command_is_consistent() {
  command().debug_assert();
}
