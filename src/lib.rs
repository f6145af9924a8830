//! Rock-paper-scissors against a computer opponent.
//!
//! - [`gameplay`] — choices, outcomes, and the round resolver
//! - [`players`] — the opponent seam and its uniform random [`Robot`]
//! - [`terminal`] — prompt-until-valid input and line output
//! - [`session`] — sets of rounds and the play-again loop
pub mod gameplay;
pub mod players;
pub mod session;
pub mod terminal;

pub use gameplay::*;
pub use players::*;
pub use session::*;
pub use terminal::*;

// ============================================================================
// SESSION PARAMETERS
// ============================================================================
/// Rounds played before asking whether to play again.
pub const ROUNDS: usize = 3;
/// Prompt for the user's choice.
pub const CHOICE_PROMPT: &str = "Elige piedra, papel o tijera";
/// Prompt after each set of rounds.
pub const AGAIN_PROMPT: &str = "¿Quieres jugar de nuevo? (s/n)";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr, leaving stdout to the game.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
