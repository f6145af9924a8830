use super::closed::Closed;
use super::terminal::Terminal;
use dialoguer::Input;
use std::fmt::Display;

/// Interactive terminal through dialoguer prompts.
///
/// Rejected replies are flagged inline by dialoguer's validator and the
/// prompt stays open until the reply parses.
#[derive(Debug, Default)]
pub struct Dialog;

impl Dialog {
    fn closed(e: dialoguer::Error) -> anyhow::Error {
        match e {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                Closed.into()
            }
            e => e.into(),
        }
    }
}

impl Terminal for Dialog {
    fn ask<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: for<'a> TryFrom<&'a str, Error = String> + 'static,
    {
        let reply = Input::<String>::new()
            .with_prompt(prompt)
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                T::try_from(i.as_str()).map(|_| ())
            })
            .interact_text()
            .map_err(Self::closed)?;
        T::try_from(reply.as_str()).map_err(anyhow::Error::msg)
    }

    fn say<D>(&mut self, line: D) -> anyhow::Result<()>
    where
        D: Display,
    {
        println!("{}", line);
        Ok(())
    }
}
