use crate::engine::Engine;
use crate::error::GtpError;
use crate::registry::{Context, Registry, Reply};
use crate::request::parse_line;
use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
  Continue,
  Quit,
}

/// A GTP session: reads one command at a time, runs it against the engine
/// and writes a framed response to `output`.
pub struct Connection<'r, A, W> {
  registry: &'r Registry<A>,
  pub engine: Engine<A>,
  output: W,
  debug: bool,
}

impl<'r, A, W: Write> Connection<'r, A, W> {
  pub fn new(registry: &'r Registry<A>, engine: Engine<A>, output: W, debug: bool) -> Self {
    Connection {
      registry,
      engine,
      output,
      debug,
    }
  }

  pub fn into_output(self) -> W {
    self.output
  }

  pub fn respond(&mut self, text: &str) -> Result<()> {
    write!(self.output, "= {}\n\n", text)?;
    self.output.flush()?;
    Ok(())
  }

  pub fn error(&mut self, text: &str) -> Result<()> {
    write!(self.output, "? {}\n\n", text)?;
    self.output.flush()?;
    Ok(())
  }

  /// Handles a single input line. Protocol errors are answered and the
  /// session continues; a handler fault is returned as an error.
  pub fn execute(&mut self, line: &str) -> Result<Flow> {
    let Some(request) = parse_line(line) else {
      return Ok(Flow::Continue);
    };
    let registry = self.registry;
    let Some(command) = registry.find(request.name) else {
      if self.debug {
        log::warn!("Unknown command: {}", request.name);
      }
      self.error(&GtpError::UnknownCommand.to_string())?;
      return Ok(Flow::Continue);
    };
    if let Some(arity) = command.arity
      && arity.count != request.args.len()
    {
      self.error(&GtpError::ArgumentCount { usage: arity.usage }.to_string())?;
      return Ok(Flow::Continue);
    }
    let context = Context {
      engine: &mut self.engine,
      registry,
      args: &request.args,
    };
    match (command.handler)(context) {
      Ok(Reply::Success(text)) => self.respond(&text)?,
      Ok(Reply::Quit) => {
        self.respond("")?;
        return Ok(Flow::Quit);
      }
      Err(e) if e.is_recoverable() => {
        if self.debug {
          log::debug!("Command {} failed: {}", request.name, e);
        }
        self.error(&e.to_string())?;
      }
      Err(e) => {
        if self.debug {
          log::error!("Error executing command {}: {:?}", request.name, e);
        }
        return Err(e).with_context(|| format!("command '{}' failed", request.name));
      }
    }
    Ok(Flow::Continue)
  }

  /// Reads commands until `quit` or the end of input.
  pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
    let mut line = String::new();
    loop {
      line.clear();
      if input.read_line(&mut line)? == 0 {
        log::info!("End of input.");
        return Ok(());
      }
      if self.execute(&line)? == Flow::Quit {
        log::info!("Quit.");
        return Ok(());
      }
    }
  }
}
