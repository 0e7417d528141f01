use crate::commands;
use crate::engine::Engine;
use crate::error::GtpError;
use ninuki_ai::ai::AI;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Reply {
  Success(String),
  /// Respond with an empty success and stop reading commands.
  Quit,
}

impl From<String> for Reply {
  fn from(text: String) -> Self {
    Reply::Success(text)
  }
}

impl From<&str> for Reply {
  fn from(text: &str) -> Self {
    Reply::Success(text.to_string())
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Arity {
  pub count: usize,
  pub usage: &'static str,
}

pub struct Context<'a, A> {
  pub engine: &'a mut Engine<A>,
  pub registry: &'a Registry<A>,
  pub args: &'a [&'a str],
}

pub type Handler<A> = for<'a> fn(Context<'a, A>) -> Result<Reply, GtpError>;

pub struct Command<A> {
  pub name: &'static str,
  pub arity: Option<Arity>,
  pub handler: Handler<A>,
}

/// Command table of a session. Filled once at startup and only read
/// afterwards; commands keep their registration order.
pub struct Registry<A> {
  commands: Vec<Command<A>>,
}

impl<A> Registry<A> {
  pub fn empty() -> Self {
    Registry { commands: Vec::new() }
  }

  pub fn register(&mut self, name: &'static str, handler: Handler<A>) -> &mut Self {
    self.commands.push(Command {
      name,
      arity: None,
      handler,
    });
    self
  }

  pub fn register_with_arity(
    &mut self,
    name: &'static str,
    count: usize,
    usage: &'static str,
    handler: Handler<A>,
  ) -> &mut Self {
    self.commands.push(Command {
      name,
      arity: Some(Arity { count, usage }),
      handler,
    });
    self
  }

  /// Looks a command up by name. `gogui_foo` is accepted as a spelling of
  /// `gogui-foo`.
  pub fn find(&self, name: &str) -> Option<&Command<A>> {
    self.commands.iter().find(|command| command.name == name).or_else(|| {
      let rest = name.strip_prefix("gogui_")?;
      self
        .commands
        .iter()
        .find(|command| command.name.strip_prefix("gogui-") == Some(rest))
    })
  }

  pub fn contains(&self, name: &str) -> bool {
    self.find(name).is_some()
  }

  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.commands.iter().map(|command| command.name)
  }

  pub fn len(&self) -> usize {
    self.commands.len()
  }

  pub fn is_empty(&self) -> bool {
    self.commands.is_empty()
  }
}

impl<A: AI> Registry<A> {
  pub fn new() -> Self {
    let mut registry = Registry::empty();
    commands::register_all(&mut registry);
    registry
  }
}

impl<A: AI> Default for Registry<A> {
  fn default() -> Self {
    Self::new()
  }
}
