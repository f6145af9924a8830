//! Opponents.
//!
//! The session only ever asks an opponent for its next [`Choice`](crate::Choice),
//! so anything from a seeded RNG to a canned sequence can sit across the table.
mod player;
mod robot;

pub use player::*;
pub use robot::*;
