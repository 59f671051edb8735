use itertools::Itertools;

use crate::{
    math::{state_set, Map, Set, StateSet},
    prelude::*,
};

mod subset;
pub use subset::determinize;

mod superstate;
pub use superstate::{SuperState, SuperStateId};

mod supertransition;
pub use supertransition::SuperTransition;

/// The deterministic automaton obtained from an epsilon-free [`Automaton`] through the subset
/// construction, see [`determinize`].
///
/// Its states are [`SuperState`]s, listed in the order in which they were discovered, so the
/// superstate with index `0` is the initial one. Every superstate is reachable from it and has
/// at most one outgoing [`SuperTransition`] per symbol.
#[derive(Clone, Debug, Default)]
pub struct SuperAutomaton {
    states: Vec<SuperState>,
    transitions: Set<SuperTransition>,
    index: Map<StateSet, SuperStateId>,
    alphabet: Alphabet,
    capacity: usize,
}

impl SuperAutomaton {
    /// Determinizes `automaton`, equivalent to [`determinize`].
    pub fn from_automaton(automaton: &Automaton) -> Result<Self, AutomatonError> {
        determinize(automaton)
    }

    /// Creates an empty superautomaton for the states and alphabet of `automaton`.
    pub(crate) fn for_automaton(automaton: &Automaton) -> Self {
        Self {
            alphabet: automaton.alphabet().clone(),
            capacity: automaton.size(),
            ..Default::default()
        }
    }

    /// Creates an empty member set that is comparable with the ones stored in `self`.
    pub(crate) fn empty_set(&self) -> StateSet {
        state_set(self.capacity)
    }

    /// Returns the index of the superstate subsuming exactly `members`, creating it if
    /// necessary. The flag is true if the superstate is new.
    pub(crate) fn intern(
        &mut self,
        members: StateSet,
        automaton: &Automaton,
    ) -> (SuperStateId, bool) {
        if let Some(id) = self.index.get(&members) {
            return (*id, false);
        }
        let id = self.states.len();
        self.index.insert(members.clone(), id);
        self.states.push(SuperState::new(id, members, automaton));
        (id, true)
    }

    /// Adds `source --symbol--> target` unless it exists. Returns `None` for an existing edge and
    /// fails if `source` already has a different successor on `symbol`.
    pub(crate) fn add_transition(
        &mut self,
        source: SuperStateId,
        symbol: Symbol,
        target: SuperStateId,
    ) -> Result<Option<SuperTransition>, AutomatonError> {
        let transition = SuperTransition::new(source, symbol, target);
        if self.transitions.contains(&transition) {
            return Ok(None);
        }
        self.states[source].add_outbound(transition.clone())?;
        self.states[target].add_inbound(transition.clone())?;
        self.transitions.insert(transition.clone());
        Ok(Some(transition))
    }

    /// The initial superstate. Every superautomaton produced by [`determinize`] has one.
    pub fn initial(&self) -> Option<&SuperState> {
        self.states.first()
    }

    /// Returns the superstate with the given index.
    ///
    /// # Panics
    /// If `state` does not belong to `self`.
    pub fn state(&self, state: SuperStateId) -> &SuperState {
        &self.states[state]
    }

    /// All superstates in discovery order.
    pub fn states(&self) -> &[SuperState] {
        &self.states
    }

    /// The number of superstates.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// The alphabet of the automaton this was built from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Looks up the superstate that subsumes exactly the given states.
    pub fn find<I: IntoIterator<Item = StateId>>(&self, members: I) -> Option<&SuperState> {
        let mut set = self.empty_set();
        set.extend(members);
        self.index.get(&set).map(|id| &self.states[*id])
    }

    /// The successor of `state` on `symbol`.
    pub fn successor(&self, state: SuperStateId, symbol: &Symbol) -> Option<SuperStateId> {
        self.states.get(state)?.successor(symbol)
    }

    /// All transitions in the order they were created.
    pub fn transitions(&self) -> impl Iterator<Item = &SuperTransition> + '_ {
        self.transitions.iter()
    }

    /// All transitions sorted by source name, symbol and target name.
    pub fn sorted_transitions(&self) -> Vec<&SuperTransition> {
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

    /// Returns true if no superstate has two outgoing transitions on the same symbol.
    pub fn is_deterministic(&self) -> bool {
        self.transitions
            .iter()
            .map(|t| (t.source(), t.symbol()))
            .all_unique()
    }
}

impl TryFrom<&Automaton> for SuperAutomaton {
    type Error = AutomatonError;

    fn try_from(value: &Automaton) -> Result<Self, Self::Error> {
        determinize(value)
    }
}
