use super::choice::Choice;
use colored::ColoredString;
use colored::Colorize;

/// Result of a round, seen from the user's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same round seen from the other side.
    pub const fn flip(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Win => "¡Ganaste!",
            Outcome::Lose => "¡Perdiste!",
            Outcome::Tie => "Empate",
        }
    }
    pub fn paint(&self) -> ColoredString {
        match self {
            Outcome::Win => self.message().green(),
            Outcome::Lose => self.message().red(),
            Outcome::Tie => self.message().yellow(),
        }
    }
}

/// (user, computer)
impl From<(Choice, Choice)> for Outcome {
    fn from((user, computer): (Choice, Choice)) -> Self {
        if user == computer {
            Outcome::Tie
        } else if user.beats(&computer) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_involution() {
        for o in [Outcome::Win, Outcome::Lose, Outcome::Tie] {
            assert_eq!(o.flip().flip(), o);
        }
    }

    #[test]
    fn messages() {
        assert_eq!(Outcome::Win.to_string(), "¡Ganaste!");
        assert_eq!(Outcome::Lose.to_string(), "¡Perdiste!");
        assert_eq!(Outcome::Tie.to_string(), "Empate");
    }
}
