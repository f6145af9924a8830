use super::choice::Choice;
use super::outcome::Outcome;

/// Decide a round from the user's side.
pub fn resolve(user: Choice, computer: Choice) -> Outcome {
    Outcome::from((user, computer))
}

/// One user throw against one computer throw.
///
/// Lives only as long as it takes to show the result;
/// the session keeps nothing but the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    user: Choice,
    computer: Choice,
}

impl Round {
    pub fn user(&self) -> Choice {
        self.user
    }
    pub fn computer(&self) -> Choice {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        resolve(self.user, self.computer)
    }
    /// The same round with the sides swapped.
    pub fn mirror(&self) -> Round {
        Round::from((self.computer, self.user))
    }
}

/// (user, computer)
impl From<(Choice, Choice)> for Round {
    fn from((user, computer): (Choice, Choice)) -> Self {
        Self { user, computer }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "La computadora eligió {}.", self.computer)?;
        write!(f, "{}", self.outcome().paint())
    }
}
