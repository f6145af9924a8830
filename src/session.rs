//! Sets of rounds with a play-again prompt between them.
use crate::*;

/// A sitting at the table: one human at a [`Terminal`], one [`Player`] opposite.
///
/// Plays `rounds` rounds, asks whether to go again, and repeats until the
/// answer is no or the input runs out.
pub struct Session<T, P>
where
    T: Terminal,
    P: Player,
{
    terminal: T,
    opponent: P,
    rounds: usize,
    tally: Tally,
}

impl<T, P> Session<T, P>
where
    T: Terminal,
    P: Player,
{
    pub fn new(terminal: T, opponent: P) -> Self {
        Self {
            terminal,
            opponent,
            rounds: ROUNDS,
            tally: Tally::default(),
        }
    }
    /// Rounds per set; at least one.
    pub fn rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Play until the human declines another set, then show the score.
    /// A closed input ends the session like a "no" would.
    pub fn run(&mut self) -> anyhow::Result<Tally> {
        log::info!("session starts, {} rounds per set", self.rounds);
        match self.sets() {
            Ok(()) => {}
            Err(e) if e.is::<Closed>() => log::warn!("input closed, ending session"),
            Err(e) => return Err(e),
        }
        self.terminal.say(self.tally)?;
        log::info!("session over: {}", self.tally);
        Ok(self.tally)
    }

    /// Play round `n` of the current set.
    pub fn play(&mut self, n: usize) -> anyhow::Result<Round> {
        self.terminal.say(format!("\nRonda {}", n))?;
        let user = self.terminal.ask::<Choice>(CHOICE_PROMPT)?;
        let computer = self.opponent.choose();
        let round = Round::from((user, computer));
        self.terminal.say(round)?;
        self.tally.record(round.outcome());
        log::info!("{:?} vs {:?}: {:?}", user, computer, round.outcome());
        Ok(round)
    }

    fn sets(&mut self) -> anyhow::Result<()> {
        loop {
            for n in 1..=self.rounds {
                self.play(n)?;
            }
            match self.terminal.ask::<Answer>(AGAIN_PROMPT)? {
                Answer::Yes => log::debug!("another set"),
                Answer::No => return Ok(()),
            }
        }
    }
}
