use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{Map, OrderedSet, Set},
    prelude::*,
};

mod builder;
pub use builder::AutomatonBuilder;

mod epsilon;

mod state;
pub use state::{Adjacency, State, StateId, StateKind};

mod transition;
pub use transition::Transition;

/// A nondeterministic finite automaton whose transitions may be labeled with [`EPSILON`].
///
/// The automaton owns its states (keyed by name, in insertion order), its [`Alphabet`], the
/// flat list of [`Transition`]s and the set of initial states. The flat list is authoritative,
/// the per-state adjacency indices are kept in sync with it by every mutation.
///
/// Automata are usually constructed through [`AutomatonBuilder`], normalized once through
/// [`Automaton::eliminate_epsilons`] and then handed to [`crate::determinize`].
#[derive(Clone, Debug, Default)]
pub struct Automaton {
    states: Map<String, State>,
    alphabet: Alphabet,
    transitions: Set<Transition>,
    initial: OrderedSet<StateId>,
}

impl Automaton {
    /// Creates an automaton without states and transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for an automaton.
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::default()
    }

    /// Adds a fresh state with the given name and status.
    pub fn add_state<S: Into<String>>(
        &mut self,
        name: S,
        kind: StateKind,
    ) -> Result<StateId, AutomatonError> {
        let name = name.into();
        if self.states.contains_key(&name) {
            return Err(AutomatonError::DuplicateState(name));
        }
        let id = self.states.len();
        self.states.insert(name.clone(), State::new(id, name, kind));
        Ok(id)
    }

    /// Adds a letter to the alphabet. Returns true if it was not present before.
    pub fn add_symbol<S: Into<Symbol>>(&mut self, symbol: S) -> Result<bool, AutomatonError> {
        self.alphabet.insert(symbol.into())
    }

    /// Marks `state` as initial. Returns true if it was not initial before.
    pub fn add_initial_state(&mut self, state: StateId) -> Result<bool, AutomatonError> {
        self.check_id(state)?;
        Ok(self.initial.insert(state))
    }

    /// Adds the transition `source --symbol--> target` unless an identical one exists already.
    /// Returns the newly created transition, or `None` if nothing had to be added.
    ///
    /// Letters that are not yet part of the alphabet are added to it.
    pub fn add_transition(
        &mut self,
        source: StateId,
        symbol: Symbol,
        target: StateId,
    ) -> Result<Option<Transition>, AutomatonError> {
        self.check_id(source)?;
        self.check_id(target)?;

        let transition = Transition::new(source, symbol, target);
        if self.transitions.contains(&transition) {
            return Ok(None);
        }
        if !transition.is_epsilon() {
            self.alphabet.insert(transition.symbol().clone())?;
        }

        self.states[source].add_outbound(transition.clone())?;
        self.states[target].add_inbound(transition.clone())?;
        self.transitions.insert(transition.clone());
        trace!("added transition {}", transition.show_in(self));
        Ok(Some(transition))
    }

    /// Removes `transition` from the flat list and from the adjacency indices of both of its
    /// endpoints.
    pub(crate) fn remove_transition(
        &mut self,
        transition: &Transition,
    ) -> Result<(), AutomatonError> {
        if !self.transitions.shift_remove(transition) {
            return Err(AutomatonError::MissingTransition {
                state: self.state_name(transition.source()),
                transition: transition.to_string(),
            });
        }
        self.states[transition.source()].remove_outbound(transition)?;
        self.states[transition.target()].remove_inbound(transition)?;
        Ok(())
    }

    fn check_id(&self, state: StateId) -> Result<(), AutomatonError> {
        if state < self.states.len() {
            Ok(())
        } else {
            Err(AutomatonError::UnknownState(format!("#{state}")))
        }
    }

    fn state_name(&self, state: StateId) -> String {
        self.get_state(state)
            .map(|q| q.name().to_string())
            .unwrap_or_else(|| format!("#{state}"))
    }

    pub(crate) fn state_mut(&mut self, state: StateId) -> &mut State {
        &mut self.states[state]
    }

    /// Returns the state with the given index.
    ///
    /// # Panics
    /// If `state` was not handed out by this automaton.
    pub fn state(&self, state: StateId) -> &State {
        &self.states[state]
    }

    /// Returns the state with the given index, if it exists.
    pub fn get_state(&self, state: StateId) -> Option<&State> {
        self.states.get_index(state).map(|(_, q)| q)
    }

    /// Looks up the index of the state with the given name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states.get_index_of(name)
    }

    /// Iterates over all states in the order they were added.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.values()
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// The alphabet, epsilon is never part of it.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All transitions in the order they were added.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter()
    }

    /// Returns true if the transition `source --symbol--> target` exists.
    pub fn has_transition(&self, source: StateId, symbol: &Symbol, target: StateId) -> bool {
        self.state(source)
            .outbound_on(symbol)
            .iter()
            .any(|t| t.target() == target)
    }

    /// All transitions sorted by source name, symbol and target name. This order is only
    /// meant for reproducible output.
    pub fn sorted_transitions(&self) -> Vec<&Transition> {
        self.transitions
            .iter()
            .sorted_by(|l, r| {
                self.state(l.source())
                    .name()
                    .cmp(self.state(r.source()).name())
                    .then_with(|| l.symbol().cmp(r.symbol()))
                    .then_with(|| {
                        self.state(l.target())
                            .name()
                            .cmp(self.state(r.target()).name())
                    })
            })
            .collect()
    }

    /// The epsilon-labeled transitions, in insertion order.
    pub fn epsilon_transitions(&self) -> Vec<Transition> {
        self.transitions
            .iter()
            .filter(|t| t.is_epsilon())
            .cloned()
            .collect()
    }

    /// Returns true if no transition is labeled with epsilon.
    pub fn is_epsilon_free(&self) -> bool {
        self.transitions.iter().all(|t| !t.is_epsilon())
    }

    /// The indices of the initial states.
    pub fn initial_states(&self) -> &OrderedSet<StateId> {
        &self.initial
    }

    /// Iterates over the accepting states.
    pub fn accepting_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states().filter(|q| q.is_accepting())
    }
}
