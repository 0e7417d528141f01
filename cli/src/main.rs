mod config;
#[cfg(test)]
mod config_test;

use crate::config::cli_parse;
use anyhow::Result;
use ninuki_ai::random_ai::RandomAI;
use ninuki_protocol::{connection::Connection, engine::Engine, registry::Registry};
use rand::{SeedableRng, rngs::SmallRng};
use std::io;

fn main() -> Result<()> {
  let config = cli_parse();
  let env = env_logger::Env::default().filter_or("RUST_LOG", if config.debug { "debug" } else { "warn" });
  env_logger::Builder::from_env(env).init();
  let rng = match config.seed {
    Some(seed) => SmallRng::seed_from_u64(seed),
    None => SmallRng::from_os_rng(),
  };
  let registry: Registry<RandomAI<SmallRng>> = Registry::new();
  log::info!("Starting with board size {} and {} commands.", config.size, registry.len());
  let engine = Engine::new(
    env!("CARGO_BIN_NAME"),
    clap::crate_version!(),
    config.size,
    RandomAI::new(rng),
  );
  let mut connection = Connection::new(&registry, engine, io::stdout(), config.debug);
  connection.run(io::stdin().lock())
}
