use crate::gameplay::Choice;

/// Anything that can throw a [`Choice`] when asked.
pub trait Player {
    fn choose(&mut self) -> Choice;
}
