use thiserror::Error;

use crate::alphabet::Symbol;

/// Errors raised while building or transforming automata.
///
/// Apart from the construction errors (`UnknownState`, `DuplicateState`, `EpsilonInAlphabet`),
/// every variant signals a broken internal invariant: the operation that raised it is aborted
/// and the automaton should not be used any further.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// An epsilon transition survived [`crate::Automaton::eliminate_epsilons`].
    #[error("epsilon transition `{0}` is left over after elimination")]
    EpsilonLeftover(String),
    /// A superstate was about to receive a second successor on one symbol.
    #[error(
        "superstate `{state}` already has an outbound transition on `{symbol}`, \
         adding `{transition}` violates determinism"
    )]
    DeterminismViolation {
        /// The superstate that would lose determinism.
        state: String,
        /// The symbol with two successors.
        symbol: Symbol,
        /// The rejected transition.
        transition: String,
    },
    /// A transition was attached to the outbound index of a state it does not leave.
    #[error("cannot attach `{transition}` to state `{state}`: source does not match")]
    #[allow(missing_docs)]
    SourceMismatch { state: String, transition: String },
    /// A transition was attached to the inbound index of a state it does not enter.
    #[error("cannot attach `{transition}` to state `{state}`: target does not match")]
    #[allow(missing_docs)]
    TargetMismatch { state: String, transition: String },
    /// A transition that is not recorded was about to be removed.
    #[error("transition `{transition}` is not recorded at state `{state}`")]
    #[allow(missing_docs)]
    MissingTransition { state: String, transition: String },
    /// A name or index does not refer to a state of the automaton.
    #[error("state `{0}` does not exist")]
    UnknownState(String),
    /// Two states with the same name were declared.
    #[error("state `{0}` is declared more than once")]
    DuplicateState(String),
    /// Epsilon was about to be added to an alphabet.
    #[error("epsilon cannot be part of an alphabet")]
    EpsilonInAlphabet,
    /// The subset construction was applied to an automaton with epsilon transitions.
    #[error("automaton still has {0} epsilon transition(s), eliminate them before determinizing")]
    NotEpsilonFree(usize),
    /// More letters were requested than the generated names `a` to `z` provide.
    #[error("cannot generate {0} letters, at most 26 are available")]
    TooManyLetters(usize),
    /// A fixture index outside of `1..=fixtures::COUNT`.
    #[error("there is no fixture with index {0}")]
    UnknownFixture(usize),
}
