use colored::Colorize;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// A throw in rock-paper-scissors.
///
/// Dominance is cyclic: Rock beats Scissors, Scissors beats Paper,
/// Paper beats Rock.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Choice {
    /// All three choices in canonical order.
    pub const fn all() -> [Choice; 3] {
        [Choice::Rock, Choice::Paper, Choice::Scissors]
    }
    /// The one choice this choice defeats.
    pub const fn prey(&self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Scissors => Choice::Paper,
            Choice::Paper => Choice::Rock,
        }
    }
    pub fn beats(&self, other: &Choice) -> bool {
        self.prey() == *other
    }
    /// Spanish name, as shown to the player.
    pub fn word(&self) -> &'static str {
        match self {
            Choice::Rock => "piedra",
            Choice::Paper => "papel",
            Choice::Scissors => "tijera",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Choice {
    fn from(n: u8) -> Choice {
        match n {
            0 => Choice::Rock,
            1 => Choice::Paper,
            2 => Choice::Scissors,
            _ => unreachable!("invalid choice"),
        }
    }
}
impl From<Choice> for u8 {
    fn from(c: Choice) -> u8 {
        c as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Choice {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "piedra" | "rock" => Ok(Choice::Rock),
            "papel" | "paper" => Ok(Choice::Paper),
            "tijera" | "tijeras" | "scissors" => Ok(Choice::Scissors),
            _ => Err(String::from("Opción inválida. Elige piedra, papel o tijera")),
        }
    }
}

/// uniform over all three choices
impl Distribution<Choice> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        Choice::from(rng.random_range(0..3u8))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.word().bold())
    }
}
