pub mod roster;
pub mod seed;

pub use roster::{RosterError, RosterStore};
