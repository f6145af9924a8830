//! Where the human sits.
//!
//! - [`Terminal`] — prompt until the reply parses, print a line
//! - [`Dialog`] — interactive widgets through dialoguer
//! - [`Script`] — plain lines over any reader and writer
mod closed;
#[cfg(feature = "cli")]
mod dialog;
mod script;
mod terminal;

pub use closed::*;
#[cfg(feature = "cli")]
pub use dialog::*;
pub use script::*;
pub use terminal::*;
