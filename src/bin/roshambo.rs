//! Roshambo Binary
//!
//! Rock-paper-scissors against the computer, in sets of rounds.
//!
//! Options: --rounds, --seed, --plain, --verbose

use clap::Parser;
use roshambo::*;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        default_value_t = ROUNDS as u16,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Rounds per set before asking to play again"
    )]
    rounds: u16,
    #[arg(short, long, help = "Seed the computer opponent for a reproducible game")]
    seed: Option<u64>,
    #[arg(long, help = "Plain line prompts instead of interactive widgets")]
    plain: bool,
    #[arg(short, long, help = "Debug logs on stderr")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    })?;
    let robot = Robot::from(args.seed);
    let rounds = usize::from(args.rounds);
    let tally = match args.plain || !std::io::stdin().is_terminal() {
        true => Session::new(Script::stdio(), robot).rounds(rounds).run()?,
        false => Session::new(Dialog, robot).rounds(rounds).run()?,
    };
    log::debug!("exiting after {} rounds", tally.rounds());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_default_to_a_set_of_three() {
        let args = Args::try_parse_from(["roshambo"]).unwrap();
        assert_eq!(usize::from(args.rounds), ROUNDS);
        assert_eq!(args.seed, None);
        assert!(!args.plain);
    }

    #[test]
    fn zero_rounds_rejected() {
        assert!(Args::try_parse_from(["roshambo", "--rounds", "0"]).is_err());
        assert!(Args::try_parse_from(["roshambo", "-r", "1", "-s", "9", "--plain"]).is_ok());
    }
}
