use super::closed::Closed;
use super::terminal::Terminal;
use std::fmt::Display;
use std::io::BufRead;
use std::io::Write;

/// Line-oriented terminal over any reader and writer.
///
/// Used for piped stdin, `--plain`, and driving sessions in tests.
pub struct Script<R, W> {
    input: R,
    output: W,
}

impl<R, W> Script<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Script<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Terminal for Script<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: for<'a> TryFrom<&'a str, Error = String> + 'static,
    {
        loop {
            write!(self.output, "{}: ", prompt)?;
            self.output.flush()?;
            let ref mut bytes = Vec::new();
            if self.input.read_until(b'\n', bytes)? == 0 {
                return Err(Closed.into());
            }
            let line = String::from_utf8_lossy(bytes.as_slice());
            match T::try_from(line.as_ref()) {
                Ok(reply) => return Ok(reply),
                Err(e) => {
                    log::debug!("rejected reply {:?}", line.trim());
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn say<D>(&mut self, line: D) -> anyhow::Result<()>
    where
        D: Display,
    {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Answer;
    use crate::gameplay::Choice;

    #[test]
    fn reprompts_until_valid() {
        let ref mut out = Vec::new();
        let choice = Script::new("lagarto\n\nSPOCK\n  Tijera \n".as_bytes(), &mut *out)
            .ask::<Choice>("elige")
            .unwrap();
        let out = String::from_utf8(out.clone()).unwrap();
        assert_eq!(choice, Choice::Scissors);
        assert_eq!(out.matches("elige: ").count(), 4);
        assert_eq!(out.matches("Opción inválida").count(), 3);
    }

    #[test]
    fn undecodable_bytes_reprompt() {
        let ref mut out = Vec::new();
        let choice = Script::new(b"\xff\xfe\npie\xf0dra\npiedra\n".as_slice(), &mut *out)
            .ask::<Choice>("elige")
            .unwrap();
        let out = String::from_utf8(out.clone()).unwrap();
        assert_eq!(choice, Choice::Rock);
        assert_eq!(out.matches("Opción inválida").count(), 2);
    }

    #[test]
    fn closed_input_is_reported() {
        let err = Script::new("quizas\n".as_bytes(), Vec::new())
            .ask::<Answer>("otra?")
            .unwrap_err();
        assert!(err.is::<Closed>());
    }

    #[test]
    fn say_writes_a_line() {
        let ref mut out = Vec::new();
        Script::new("".as_bytes(), &mut *out).say("Ronda 1").unwrap();
        assert_eq!(out.as_slice(), b"Ronda 1\n".as_slice());
    }
}
