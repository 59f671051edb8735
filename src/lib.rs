//! Library for turning nondeterministic finite automata with epsilon transitions into
//! deterministic ones.
//!
//! The input is an [`Automaton`]: a finite collection of named states, some of them accepting
//! and some of them initial, connected by transitions labeled with letters of an [`Alphabet`]
//! or with the empty word [`EPSILON`]. Processing happens in two steps:
//! - [`Automaton::eliminate_epsilons`] normalizes the automaton in place. Afterwards it has no
//!   epsilon transitions left but accepts exactly the same words.
//! - [`determinize`] applies the subset construction to the epsilon-free automaton and produces
//!   a separate [`SuperAutomaton`], whose states are [`SuperState`]s, i.e. sets of states of the
//!   input. Each superstate has at most one successor per symbol.
//!
//! ```
//! use superautomata::prelude::*;
//!
//! let mut automaton = AutomatonBuilder::default()
//!     .with_states(["q0", "q1"])
//!     .with_accepting_states(["q2"])
//!     .with_transitions([("q0", "x", "q0"), ("q0", "x", "q1"), ("q1", "y", "q2")])
//!     .with_epsilon_transitions([("q1", "q2")])
//!     .with_initial_states(["q0"])
//!     .build()
//!     .unwrap();
//!
//! automaton.eliminate_epsilons().unwrap();
//! assert!(automaton.is_epsilon_free());
//!
//! let det = determinize(&automaton).unwrap();
//! assert!(det.is_deterministic());
//! assert_eq!(det.initial().unwrap().name(), "{q0}");
//! ```
//!
//! All fallible operations return [`AutomatonError`]. Apart from malformed construction input,
//! an error indicates that an internal invariant was violated, in which case the operation is
//! aborted immediately.
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use superautomata::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol, EPSILON},
        automaton::{Automaton, AutomatonBuilder, State, StateId, StateKind, Transition},
        superautomaton::{determinize, SuperAutomaton, SuperState, SuperStateId, SuperTransition},
        AutomatonError, Show,
    };
}

/// Collection type aliases used throughout the crate.
pub mod math;

/// Symbols, the reserved epsilon symbol and alphabets.
pub mod alphabet;
pub use alphabet::{Alphabet, Symbol, EPSILON};

/// Nondeterministic automata with epsilon transitions and their normalization.
pub mod automaton;
pub use automaton::Automaton;

/// Deterministic automata obtained through the subset construction.
pub mod superautomaton;
pub use superautomaton::{determinize, SuperAutomaton, SuperState};

mod error;
pub use error::AutomatonError;

mod show;
pub use show::Show;

/// Example automata.
pub mod fixtures;

/// Random generation of automata and words. This is feature gated behind the `random` feature.
#[cfg(feature = "random")]
pub mod random;

#[cfg(test)]
pub(crate) mod testing;
