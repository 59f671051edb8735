use std::{fmt::Display, sync::Arc};

use itertools::Itertools;

use crate::{AutomatonError, Show};

/// A symbol labels a transition. It is either a letter drawn from the [`Alphabet`] of an
/// automaton, or the reserved empty word [`Symbol::Epsilon`].
///
/// Epsilon is its own variant, so no letter can ever compare equal to it, regardless of how
/// the letter is spelled. Letters are ordered by their label and epsilon is smaller than
/// every letter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// The empty word, a transition labeled with it can be taken without reading input.
    Epsilon,
    /// A letter with a textual label.
    Letter(Arc<str>),
}

/// The process-wide epsilon symbol.
pub const EPSILON: Symbol = Symbol::Epsilon;

impl Symbol {
    /// Creates a new letter with the given label.
    pub fn letter<S: AsRef<str>>(label: S) -> Self {
        Symbol::Letter(Arc::from(label.as_ref()))
    }

    /// Returns true if `self` is the empty word.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Returns the textual label of the symbol, epsilon is rendered as `ε`.
    pub fn label(&self) -> &str {
        match self {
            Symbol::Epsilon => "ε",
            Symbol::Letter(label) => label,
        }
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol::letter(value)
    }
}

impl From<char> for Symbol {
    fn from(value: char) -> Self {
        Symbol::letter(value.to_string())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Show for Symbol {
    fn show(&self) -> String {
        self.label().to_string()
    }
}

/// The working alphabet of an automaton: an ordered sequence of distinct letters. Epsilon is
/// never part of an alphabet, it may only appear on transitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<Symbol>,
}

impl Alphabet {
    /// Creates an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an alphabet from the given letters, in order. Fails if one of them is epsilon.
    pub fn from_letters<I, S>(letters: I) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        let mut alphabet = Self::new();
        for letter in letters {
            alphabet.insert(letter.into())?;
        }
        Ok(alphabet)
    }

    /// Appends `symbol` unless it is already present. Returns `true` if it was added.
    pub fn insert(&mut self, symbol: Symbol) -> Result<bool, AutomatonError> {
        if symbol.is_epsilon() {
            return Err(AutomatonError::EpsilonInAlphabet);
        }
        if self.letters.contains(&symbol) {
            return Ok(false);
        }
        self.letters.push(symbol);
        Ok(true)
    }

    /// Returns true if `symbol` is a letter of this alphabet.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.letters.contains(symbol)
    }

    /// Iterates over the letters in insertion order.
    pub fn universe(&self) -> std::slice::Iter<'_, Symbol> {
        self.letters.iter()
    }

    /// The number of letters.
    pub fn size(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the alphabet has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Show for Alphabet {
    fn show(&self) -> String {
        format!("{{{}}}", self.universe().map(Symbol::label).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_differs_from_lookalike_letters() {
        assert_ne!(EPSILON, Symbol::letter("ε"));
        assert_ne!(EPSILON, Symbol::letter("EPS"));
        assert!(EPSILON < Symbol::letter(""));
        assert!(Symbol::letter("a") < Symbol::letter("b"));
    }

    #[test]
    fn alphabet_rejects_epsilon() {
        let mut alphabet = Alphabet::from_letters(["x", "y"]).unwrap();
        assert_eq!(alphabet.insert(EPSILON), Err(AutomatonError::EpsilonInAlphabet));
        assert_eq!(alphabet.insert('x'.into()), Ok(false));
        assert_eq!(alphabet.insert('z'.into()), Ok(true));
        assert_eq!(alphabet.show(), "{x, y, z}");
        assert!(!alphabet.contains(&EPSILON));
    }
}
