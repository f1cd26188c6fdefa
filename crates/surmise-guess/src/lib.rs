//! Confidence-rated guesses and best-guess arbitration.
//!
//! Heuristics that infer some property of their input (a field's data type,
//! whether a field is required, ...) each produce a [`Guess`] carrying a
//! [`Confidence`]. [`best_guess`] then picks the most confident one.

pub mod confidence;
pub mod error;
pub mod guess;

pub use confidence::Confidence;
pub use error::GuessError;
pub use guess::{best_guess, best_guess_owned, DataType, Guess, Guessed, RequiredGuess, TypeGuess};
