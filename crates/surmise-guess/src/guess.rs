use std::fmt;
use std::sync::Arc;

use crate::confidence::Confidence;
use crate::error::GuessError;

/// Anything a heuristic produces together with a [`Confidence`].
pub trait Guess {
    fn confidence(&self) -> Confidence;
}

impl<G: Guess + ?Sized> Guess for &G {
    fn confidence(&self) -> Confidence {
        (**self).confidence()
    }
}

impl<G: Guess + ?Sized> Guess for Box<G> {
    fn confidence(&self) -> Confidence {
        (**self).confidence()
    }
}

impl<G: Guess + ?Sized> Guess for Arc<G> {
    fn confidence(&self) -> Confidence {
        (**self).confidence()
    }
}

/// An immutable guess: a payload plus the confidence the heuristic has in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guessed<T> {
    value: T,
    confidence: Confidence,
}

impl<T> Guessed<T> {
    pub fn new(value: T, confidence: Confidence) -> Self {
        Self { value, confidence }
    }

    /// Builds a guess from an untyped ranking weight, rejecting anything
    /// outside the four levels.
    pub fn try_new(value: T, weight: i64) -> Result<Self, GuessError> {
        let confidence = Confidence::from_weight(weight)?;
        Ok(Self::new(value, confidence))
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Guess for Guessed<T> {
    fn confidence(&self) -> Confidence {
        self.confidence
    }
}

impl<T: fmt::Display> fmt::Display for Guessed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.confidence)
    }
}

/// Data types a type-inference heuristic can settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Number => "number",
            DataType::Boolean => "boolean",
            DataType::Array => "array",
            DataType::Object => "object",
            DataType::Null => "null",
        };
        write!(f, "{label}")
    }
}

pub type TypeGuess = Guessed<DataType>;

/// Whether a field should be treated as required.
pub type RequiredGuess = Guessed<bool>;

impl Guessed<DataType> {
    pub fn data_type(&self) -> DataType {
        self.value
    }
}

impl Guessed<bool> {
    pub fn is_required(&self) -> bool {
        self.value
    }
}

/// Returns the most confident guess, or `None` for an empty input.
///
/// Single left-to-right scan: the running best is only replaced by a strictly
/// more confident guess, so the first of several equally confident guesses wins.
pub fn best_guess<'a, G, I>(guesses: I) -> Option<&'a G>
where
    G: Guess + ?Sized + 'a,
    I: IntoIterator<Item = &'a G>,
{
    let mut best: Option<&'a G> = None;
    let mut candidates = 0usize;

    for guess in guesses {
        candidates += 1;
        if best.is_none_or(|current| guess.confidence() > current.confidence()) {
            best = Some(guess);
        }
    }

    tracing::trace!(
        target: "surmise_guess",
        candidates,
        winner = ?best.map(|guess| guess.confidence()),
        "best guess selected"
    );
    best
}

/// Owning variant of [`best_guess`] with the same tie-breaking.
pub fn best_guess_owned<G: Guess>(guesses: Vec<G>) -> Option<G> {
    let mut best: Option<G> = None;

    for guess in guesses {
        if best
            .as_ref()
            .is_none_or(|current| guess.confidence() > current.confidence())
        {
            best = Some(guess);
        }
    }

    best
}
