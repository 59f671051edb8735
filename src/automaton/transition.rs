use crate::prelude::*;

/// A directed edge `source --symbol--> target` between two states of an [`Automaton`].
///
/// Transitions are plain values, two transitions are equal if and only if source, symbol
/// and target coincide. They refer to their endpoints through [`StateId`]s, so rendering one
/// requires the automaton it belongs to, see [`Transition::show_in`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    source: StateId,
    symbol: Symbol,
    target: StateId,
}

impl Transition {
    /// Creates a new transition.
    pub fn new(source: StateId, symbol: Symbol, target: StateId) -> Self {
        Self {
            source,
            symbol,
            target,
        }
    }

    /// The state in which the transition originates.
    pub fn source(&self) -> StateId {
        self.source
    }

    /// The symbol on which the transition is taken.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The state that the transition leads to.
    pub fn target(&self) -> StateId {
        self.target
    }

    /// Returns true if the transition is labeled with epsilon.
    pub fn is_epsilon(&self) -> bool {
        self.symbol.is_epsilon()
    }

    /// Renders the transition as `source, symbol --> target` using the state names of
    /// `automaton`. Accepting endpoints are parenthesized.
    pub fn show_in(&self, automaton: &Automaton) -> String {
        format!(
            "{}, {} --> {}",
            automaton.state(self.source).show(),
            self.symbol,
            automaton.state(self.target).show()
        )
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} --{}--> #{}", self.source, self.symbol, self.target)
    }
}
