use std::fmt::Display;

/// Input and output for the person playing.
///
/// `ask` keeps prompting until the reply parses into `T`, showing the
/// parse error after every rejected reply. Bad input never surfaces as an
/// error; only a closed or broken stream does, and a closed stream is
/// reported as [`Closed`](super::Closed).
pub trait Terminal {
    fn ask<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: for<'a> TryFrom<&'a str, Error = String> + 'static;

    fn say<D>(&mut self, line: D) -> anyhow::Result<()>
    where
        D: Display;
}
