use crate::{math::OrderedMap, prelude::*};

/// Index of a state in an [`Automaton`]. States are never removed, so an index stays valid
/// for the lifetime of the automaton.
pub type StateId = usize;

/// The status of a state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKind {
    /// A state that does not accept.
    #[default]
    Ordinary,
    /// A final state, a word is accepted if it can end in one of these.
    Accepting,
}

impl StateKind {
    /// Returns `Accepting` if `accepting` holds and `Ordinary` otherwise.
    pub fn from_accepting(accepting: bool) -> Self {
        if accepting {
            StateKind::Accepting
        } else {
            StateKind::Ordinary
        }
    }

    /// Returns true for `Accepting`.
    pub fn is_accepting(&self) -> bool {
        matches!(self, StateKind::Accepting)
    }
}

/// Adjacency index of a state, for each symbol the transitions in the order they were attached.
pub type Adjacency = OrderedMap<Symbol, Vec<Transition>>;

/// A named state of an [`Automaton`] together with two views on the transitions that touch it:
/// the `outbound` index holds transitions originating here and the `inbound` index holds
/// transitions ending here, both keyed by symbol.
///
/// The automaton keeps both indices consistent: whenever a transition is listed in the outbound
/// index of its source, it is also listed in the inbound index of its target.
#[derive(Clone, Debug)]
pub struct State {
    id: StateId,
    name: String,
    kind: StateKind,
    outbound: Adjacency,
    inbound: Adjacency,
}

impl State {
    pub(crate) fn new(id: StateId, name: String, kind: StateKind) -> Self {
        Self {
            id,
            name,
            kind,
            outbound: Adjacency::new(),
            inbound: Adjacency::new(),
        }
    }

    /// The index of `self` in its automaton.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// The name of the state, names are unique within one automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the state is accepting or ordinary.
    pub fn kind(&self) -> StateKind {
        self.kind
    }

    /// Shorthand for `self.kind().is_accepting()`.
    pub fn is_accepting(&self) -> bool {
        self.kind.is_accepting()
    }

    /// Turns `self` into an accepting state. Returns true if it was ordinary before.
    pub(crate) fn promote(&mut self) -> bool {
        let promoted = !self.is_accepting();
        self.kind = StateKind::Accepting;
        promoted
    }

    /// All transitions leaving `self`, grouped by symbol.
    pub fn outbound(&self) -> &Adjacency {
        &self.outbound
    }

    /// All transitions entering `self`, grouped by symbol.
    pub fn inbound(&self) -> &Adjacency {
        &self.inbound
    }

    /// The transitions leaving `self` on `symbol`.
    pub fn outbound_on(&self, symbol: &Symbol) -> &[Transition] {
        self.outbound.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }

    /// The transitions entering `self` on `symbol`.
    pub fn inbound_on(&self, symbol: &Symbol) -> &[Transition] {
        self.inbound.get(symbol).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates over every transition leaving `self`.
    pub fn edges_from(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.outbound.values().flatten()
    }

    /// Iterates over every transition entering `self`.
    pub fn edges_to(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.inbound.values().flatten()
    }

    pub(crate) fn add_outbound(&mut self, transition: Transition) -> Result<(), AutomatonError> {
        if transition.source() != self.id {
            return Err(AutomatonError::SourceMismatch {
                state: self.name.clone(),
                transition: transition.to_string(),
            });
        }
        self.outbound
            .entry(transition.symbol().clone())
            .or_default()
            .push(transition);
        Ok(())
    }

    pub(crate) fn add_inbound(&mut self, transition: Transition) -> Result<(), AutomatonError> {
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

    pub(crate) fn remove_outbound(
        &mut self,
        transition: &Transition,
    ) -> Result<(), AutomatonError> {
        if transition.source() != self.id {
            return Err(AutomatonError::SourceMismatch {
                state: self.name.clone(),
                transition: transition.to_string(),
            });
        }
        Self::detach(&mut self.outbound, transition).ok_or_else(|| {
            AutomatonError::MissingTransition {
                state: self.name.clone(),
                transition: transition.to_string(),
            }
        })
    }

    pub(crate) fn remove_inbound(&mut self, transition: &Transition) -> Result<(), AutomatonError> {
        if transition.target() != self.id {
            return Err(AutomatonError::TargetMismatch {
                state: self.name.clone(),
                transition: transition.to_string(),
            });
        }
        Self::detach(&mut self.inbound, transition).ok_or_else(|| {
            AutomatonError::MissingTransition {
                state: self.name.clone(),
                transition: transition.to_string(),
            }
        })
    }

    /// Removes `transition` from `index`, dropping the symbol entry once it becomes empty.
    fn detach(index: &mut Adjacency, transition: &Transition) -> Option<()> {
        let list = index.get_mut(transition.symbol())?;
        let pos = list.iter().position(|t| t == transition)?;
        list.remove(pos);
        if list.is_empty() {
            index.remove(transition.symbol());
        }
        Some(())
    }
}

/// States are identified by their name and status, the adjacency indices do not matter.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for State {}

impl std::hash::Hash for State {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
    }
}

impl Show for State {
    fn show(&self) -> String {
        if self.is_accepting() {
            format!("({})", self.name)
        } else {
            self.name.clone()
        }
    }
}
