use crate::prelude::*;

/// A directed edge between two superstates of a [`SuperAutomaton`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuperTransition {
    source: SuperStateId,
    symbol: Symbol,
    target: SuperStateId,
}

impl SuperTransition {
    /// Creates a new transition.
    pub fn new(source: SuperStateId, symbol: Symbol, target: SuperStateId) -> Self {
        Self {
            source,
            symbol,
            target,
        }
    }

    /// The superstate the transition leaves.
    pub fn source(&self) -> SuperStateId {
        self.source
    }

    /// The symbol the transition reads.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The superstate the transition enters.
    pub fn target(&self) -> SuperStateId {
        self.target
    }

    /// Renders the transition as `source, symbol --> target` with the superstate names of
    /// `automaton`.
    pub fn show_in(&self, automaton: &SuperAutomaton) -> String {
        format!(
            "{}, {} --> {}",
            automaton.state(self.source).show(),
            self.symbol,
            automaton.state(self.target).show()
        )
    }
}

impl std::fmt::Display for SuperTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} --{}--> #{}", self.source, self.symbol, self.target)
    }
}
