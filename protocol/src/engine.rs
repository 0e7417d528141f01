use ninuki_field::field::Field;

/// Mutable state behind a protocol session.
pub struct Engine<A> {
  pub name: String,
  pub version: String,
  pub komi: f32,
  pub field: Field,
  pub ai: A,
}

impl<A> Engine<A> {
  pub fn new(name: impl Into<String>, version: impl Into<String>, size: u32, ai: A) -> Self {
    Engine {
      name: name.into(),
      version: version.into(),
      komi: 0.0,
      field: Field::new(size),
      ai,
    }
  }
}
