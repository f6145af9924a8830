use super::player::Player;
use crate::gameplay::Choice;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Computer opponent drawing uniformly from the three choices.
pub struct Robot {
    rng: SmallRng,
}

impl Robot {
    /// Reproducible opponent: equal seeds throw equal sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl From<Option<u64>> for Robot {
    fn from(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }
}

impl Player for Robot {
    fn choose(&mut self) -> Choice {
        let choice = self.rng.random::<Choice>();
        log::debug!("robot throws {:?}", choice);
        choice
    }
}

impl std::fmt::Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = Robot::seeded(0xC0FFEE);
        let mut b = Robot::seeded(0xC0FFEE);
        let a = (0..32).map(|_| a.choose()).collect::<Vec<_>>();
        let b = (0..32).map(|_| b.choose()).collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn roughly_uniform() {
        const SAMPLES: usize = 30_000;
        let mut robot = Robot::seeded(42);
        let mut counts = [0usize; 3];
        for _ in 0..SAMPLES {
            counts[u8::from(robot.choose()) as usize] += 1;
        }
        for count in counts {
            let share = count as f32 / SAMPLES as f32;
            assert!((share - 1. / 3.).abs() < 0.02, "share {:.3}", share);
        }
    }
}
