use itertools::Itertools;

use crate::{
    math::{OrderedMap, StateSet},
    prelude::*,
};

/// Index of a superstate within its [`SuperAutomaton`].
pub type SuperStateId = usize;

/// A state of the determinized automaton. It subsumes a set of states of the source
/// [`Automaton`], its `members`, and is accepting if and only if one of them is.
///
/// The member set is the identity of a superstate. The name is derived from it by sorting the
/// member names and is only used for display.
#[derive(Clone, Debug)]
pub struct SuperState {
    id: SuperStateId,
    members: StateSet,
    name: String,
    kind: StateKind,
    outbound: OrderedMap<Symbol, SuperTransition>,
    inbound: OrderedMap<Symbol, Vec<SuperTransition>>,
}

impl SuperState {
    /// Creates the superstate with index `id` that subsumes `members`, which must be states
    /// of `automaton`.
    pub(crate) fn new(id: SuperStateId, members: StateSet, automaton: &Automaton) -> Self {
        let name = format!(
            "{{{}}}",
            members
                .iter()
                .map(|q| automaton.state(q).name())
                .sorted()
                .join(",")
        );
        let kind =
            StateKind::from_accepting(members.iter().any(|q| automaton.state(q).is_accepting()));
        Self {
            id,
            members,
            name,
            kind,
            outbound: OrderedMap::new(),
            inbound: OrderedMap::new(),
        }
    }

    /// The index of `self` in its superautomaton.
    pub fn id(&self) -> SuperStateId {
        self.id
    }

    /// The indices of the subsumed states.
    pub fn members(&self) -> &StateSet {
        &self.members
    }

    /// The display name, e.g. `{q0,q1}`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepting if at least one member is accepting.
    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Shorthand for `self.kind().is_accepting()`.
    pub fn is_accepting(&self) -> bool {
        self.kind.is_accepting()
    }

    /// The outgoing transitions, at most one per symbol.
    pub fn outbound(&self) -> &OrderedMap<Symbol, SuperTransition> {
        &self.outbound
    }

    /// The incoming transitions grouped by symbol.
    pub fn inbound(&self) -> &OrderedMap<Symbol, Vec<SuperTransition>> {
        &self.inbound
    }

    /// The successor of `self` on `symbol`, if there is one.
    pub fn successor(&self, symbol: &Symbol) -> Option<SuperStateId> {
        self.outbound.get(symbol).map(SuperTransition::target)
    }

    /// Records `transition` as the unique outgoing transition on its symbol. Fails if there is
    /// one already, or if `transition` does not leave `self`.
    pub(crate) fn add_outbound(
        &mut self,
        transition: SuperTransition,
    ) -> Result<(), AutomatonError> {
        if transition.source() != self.id {
            return Err(AutomatonError::SourceMismatch {
                state: self.name.clone(),
                transition: transition.to_string(),
            });
        }
        if self.outbound.contains_key(transition.symbol()) {
            return Err(AutomatonError::DeterminismViolation {
                state: self.name.clone(),
                symbol: transition.symbol().clone(),
                transition: transition.to_string(),
            });
        }
        self.outbound.insert(transition.symbol().clone(), transition);
        Ok(())
    }

    pub(crate) fn add_inbound(
        &mut self,
        transition: SuperTransition,
    ) -> Result<(), AutomatonError> {
        if transition.target() != self.id {
            return Err(AutomatonError::TargetMismatch {
                state: self.name.clone(),
                transition: transition.to_string(),
            });
        }
        self.inbound
            .entry(transition.symbol().clone())
            .or_default()
            .push(transition);
        Ok(())
    }
}

/// Superstates are the same if they subsume the same states.
impl PartialEq for SuperState {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for SuperState {}

impl Show for SuperState {
    fn show(&self) -> String {
        if self.is_accepting() {
            format!("({})", self.name)
        } else {
            self.name.clone()
        }
    }
}
