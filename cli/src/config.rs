use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use ninuki_field::field::{MAX_SIZE, MIN_SIZE};

#[derive(Clone, PartialEq, Debug)]
pub struct Config {
  pub size: u32,
  pub seed: Option<u64>,
  pub debug: bool,
}

pub fn command() -> Command {
  Command::new(clap::crate_name!())
    .version(clap::crate_version!())
    .about(clap::crate_description!())
    .arg(
      Arg::new("size")
        .short('s')
        .long("size")
        .help("Initial board size")
        .num_args(1)
        .value_parser(value_parser!(u32).range(MIN_SIZE as i64..MAX_SIZE as i64))
        .default_value("7"),
    )
    .arg(
      Arg::new("seed")
        .long("seed")
        .help("Fix the seed of the move generator for reproducible games")
        .num_args(1)
        .value_parser(value_parser!(u64)),
    )
    .arg(
      Arg::new("debug")
        .short('d')
        .long("debug")
        .help("Write diagnostics about every command to stderr")
        .action(ArgAction::SetTrue),
    )
}

pub fn parse_config(matches: &ArgMatches) -> Config {
  Config {
    size: matches.get_one("size").copied().unwrap(),
    seed: matches.get_one("seed").copied(),
    debug: matches.get_flag("debug"),
  }
}

pub fn cli_parse() -> Config {
  parse_config(&command().get_matches())
}
