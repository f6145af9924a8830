//! Rules of a single round.
//!
//! - [`Choice`] — what each side throws
//! - [`Outcome`] — the result from the user's side
//! - [`Round`] — one pairing of choices, resolved by [`resolve`]
//! - [`Answer`] — reply to the play-again prompt
//! - [`Tally`] — running score across rounds
mod answer;
mod choice;
mod outcome;
mod round;
mod tally;

pub use answer::*;
pub use choice::*;
pub use outcome::*;
pub use round::*;
pub use tally::*;
