//! Removal of epsilon transitions.
//!
//! Elimination runs as a sequence of passes over the shared transition set. Each pass is a small
//! fixpoint computation driven by an explicit worklist that lives only for the duration of the
//! pass. Edges are only ever added if they do not exist yet, which bounds the work of every pass
//! by the number of possible edges.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::prelude::*;

impl Automaton {
    /// Removes all epsilon transitions from `self` without changing the accepted language.
    ///
    /// Afterwards the initial states are closed under epsilon reachability, every state that
    /// could reach an accepting state through epsilon transitions is accepting itself, and for
    /// every pair of an epsilon transition `a --ε--> b` and a transition `c --s--> a` the
    /// shortcut `c --s--> b` exists. Finally all epsilon transitions are dropped and the result
    /// is verified to be epsilon free.
    ///
    /// Running this on an automaton that has no epsilon transitions does not change it.
    pub fn eliminate_epsilons(&mut self) -> Result<(), AutomatonError> {
        debug!(
            "eliminating {} epsilon transition(s) from automaton with {} states",
            self.epsilon_transitions().len(),
            self.size()
        );
        self.close_initial_states();
        self.close_epsilon_transitions()?;
        self.promote_accepting_states();
        self.materialize_shortcuts()?;
        self.discard_epsilon_transitions()?;
        self.verify_epsilon_free()
    }

    /// Adds every state that is epsilon-reachable from an initial state to the initial states.
    fn close_initial_states(&mut self) -> usize {
        let mut queue: VecDeque<StateId> = self.initial.iter().copied().collect();
        let mut added = 0;

        while let Some(q) = queue.pop_front() {
            let targets = self
                .state(q)
                .outbound_on(&EPSILON)
                .iter()
                .map(Transition::target)
                .collect::<Vec<_>>();
            for p in targets {
                if self.initial.insert(p) {
                    trace!("state {} is initial through epsilon", self.state(p).name());
                    queue.push_back(p);
                    added += 1;
                }
            }
        }

        debug!("epsilon closure added {added} initial state(s)");
        added
    }

    /// Computes the transitive closure of the epsilon relation.
    ///
    /// For a dequeued `a --ε--> b` and every `c --ε--> a`, the edge `c --ε--> b` is added. If
    /// something was added, `a --ε--> b` goes back on the queue since `a` may have gained new
    /// epsilon predecessors in the meantime.
    fn close_epsilon_transitions(&mut self) -> Result<usize, AutomatonError> {
        let mut queue: VecDeque<Transition> = self.epsilon_transitions().into();
        let mut added = 0;

        while let Some(transition) = queue.pop_front() {
            let (a, b) = (transition.source(), transition.target());
            let predecessors = self
                .state(a)
                .inbound_on(&EPSILON)
                .iter()
                .map(Transition::source)
                .collect::<Vec<_>>();

            let mut progress = false;
            for c in predecessors {
                if let Some(fresh) = self.add_transition(c, EPSILON, b)? {
                    queue.push_back(fresh);
                    progress = true;
                    added += 1;
                }
            }
            if progress {
                queue.push_back(transition);
            }
        }

        debug!("epsilon closure synthesized {added} transition(s)");
        Ok(added)
    }

    /// Promotes the source of every epsilon transition into an accepting state to accepting.
    /// Relies on the epsilon relation being transitively closed, so one pass suffices.
    fn promote_accepting_states(&mut self) -> usize {
        let mut promoted = 0;
        for transition in self.epsilon_transitions() {
            if self.state(transition.target()).is_accepting()
                && self.state_mut(transition.source()).promote()
            {
                trace!(
                    "state {} is accepting through epsilon",
                    self.state(transition.source()).name()
                );
                promoted += 1;
            }
        }

        debug!("promoted {promoted} state(s) to accepting");
        promoted
    }

    /// For every `a --ε--> b` and every non-epsilon `c --s--> a`, adds `c --s--> b`.
    ///
    /// Only edges entering the source of an epsilon transition are copied to its target; edges
    /// leaving `c` are never followed further. Whenever a dequeued epsilon transition caused an
    /// addition it is enqueued again.
    fn materialize_shortcuts(&mut self) -> Result<usize, AutomatonError> {
        let mut queue: VecDeque<Transition> = self.epsilon_transitions().into();
        let mut added = 0;

        while let Some(transition) = queue.pop_front() {
            let (a, b) = (transition.source(), transition.target());
            let incoming = self
                .state(a)
                .edges_to()
                .filter(|t| !t.is_epsilon())
                .map(|t| (t.source(), t.symbol().clone()))
                .collect::<Vec<_>>();

            let mut progress = false;
            for (c, symbol) in incoming {
                if self.add_transition(c, symbol, b)?.is_some() {
                    progress = true;
                    added += 1;
                }
            }
            if progress {
                queue.push_back(transition);
            }
        }

        debug!("materialized {added} shortcut transition(s)");
        Ok(added)
    }

    /// Drops every epsilon transition from the flat list and both adjacency indices.
    fn discard_epsilon_transitions(&mut self) -> Result<usize, AutomatonError> {
        let epsilon = self.epsilon_transitions();
        for transition in &epsilon {
            self.remove_transition(transition)?;
        }
        debug!("discarded {} epsilon transition(s)", epsilon.len());
        Ok(epsilon.len())
    }

    /// Checks that no adjacency index of any state still mentions epsilon.
    fn verify_epsilon_free(&self) -> Result<(), AutomatonError> {
        for state in self.states() {
            if let Some(leftover) = state
                .outbound_on(&EPSILON)
                .iter()
                .chain(state.inbound_on(&EPSILON))
                .next()
            {
                return Err(AutomatonError::EpsilonLeftover(leftover.show_in(self)));
            }
        }
        Ok(())
    }
}
