use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    math::{OrderedMap, StateSet},
    prelude::*,
};

/// Applies the subset construction to the epsilon-free `automaton`, which is left untouched.
///
/// The initial superstate subsumes all initial states. Starting from it, every discovered
/// superstate is expanded exactly once: for each symbol, the targets of all transitions that
/// leave one of its members on that symbol form the member set of its successor. Superstates
/// are identified by their member sets, so each set is expanded at most once and the
/// construction terminates after at most `2^n` superstates for `n` states.
///
/// Fails with [`AutomatonError::NotEpsilonFree`] if `automaton` still has epsilon transitions,
/// and with [`AutomatonError::DeterminismViolation`] if a superstate would receive two
/// successors on one symbol.
pub fn determinize(automaton: &Automaton) -> Result<SuperAutomaton, AutomatonError> {
    let leftover = automaton.epsilon_transitions().len();
    if leftover > 0 {
        return Err(AutomatonError::NotEpsilonFree(leftover));
    }

    let mut out = SuperAutomaton::for_automaton(automaton);
    let mut initial = out.empty_set();
    initial.extend(automaton.initial_states().iter().copied());
    let (initial, _) = out.intern(initial, automaton);

    let mut queue = VecDeque::from([initial]);
    while let Some(source) = queue.pop_front() {
        for (symbol, members) in successors(automaton, out.state(source).members(), &out) {
            let (target, fresh) = out.intern(members, automaton);
            if fresh {
                trace!("discovered superstate {}", out.state(target).show());
                queue.push_back(target);
            }
            if let Some(transition) = out.add_transition(source, symbol, target)? {
                trace!("added transition {}", transition.show_in(&out));
            }
        }
    }

    debug!(
        "subset construction produced {} superstates and {} transitions from {} states",
        out.size(),
        out.transitions().count(),
        automaton.size()
    );
    Ok(out)
}

/// For each symbol, the set of states reachable from some state in `members` on that symbol.
/// Symbols without any target do not show up.
fn successors(
    automaton: &Automaton,
    members: &StateSet,
    out: &SuperAutomaton,
) -> OrderedMap<Symbol, StateSet> {
    let mut successors: OrderedMap<Symbol, StateSet> = OrderedMap::new();
    for transition in members.iter().flat_map(|q| automaton.state(q).edges_from()) {
        successors
            .entry(transition.symbol().clone())
            .or_insert_with(|| out.empty_set())
            .insert(transition.target());
    }
    successors
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{fixtures, prelude::*, testing};

    fn shown(sa: &SuperAutomaton) -> (Vec<String>, Vec<String>) {
        (
            sa.states().iter().map(|q| q.show()).collect(),
            sa.sorted_transitions()
                .into_iter()
                .map(|t| t.show_in(sa))
                .collect(),
        )
    }

    #[test_log::test]
    fn merges_targets_of_initial_states() {
        let aut = AutomatonBuilder::default()
            .with_states(["q0", "q1", "q2", "q3"])
            .with_transitions([("q0", "a", "q2"), ("q1", "a", "q3")])
            .with_initial_states(["q0", "q1"])
            .build()
            .unwrap();
        let sa = determinize(&aut).unwrap();

        let (states, transitions) = shown(&sa);
        assert_eq!(states, vec!["{q0,q1}", "{q2,q3}"]);
        assert_eq!(transitions, vec!["{q0,q1}, a --> {q2,q3}"]);

        let initial = sa.initial().unwrap();
        assert_eq!(initial.outbound().len(), 1);
        assert_eq!(
            sa.find([2, 3]).map(SuperState::id),
            sa.successor(initial.id(), &Symbol::letter("a"))
        );
        assert_eq!(aut.transitions().count(), 2, "input is left untouched");
    }

    #[test_log::test]
    fn rejects_epsilon_transitions() {
        let aut = fixtures::looping_start().unwrap();
        assert_eq!(
            determinize(&aut).unwrap_err(),
            AutomatonError::NotEpsilonFree(2)
        );
    }

    #[test_log::test]
    fn looping_start_after_elimination() {
        let mut aut = fixtures::looping_start().unwrap();
        aut.eliminate_epsilons().unwrap();
        let sa = SuperAutomaton::try_from(&aut).unwrap();

        let (states, transitions) = shown(&sa);
        assert_eq!(states, vec!["({q0,q2})", "({q0,q1,q2})"]);
        assert_eq!(
            transitions,
            vec![
                "({q0,q1,q2}), x --> ({q0,q1,q2})",
                "({q0,q1,q2}), y --> ({q0,q2})",
                "({q0,q2}), x --> ({q0,q1,q2})",
                "({q0,q2}), y --> ({q0,q2})",
            ]
        );
        assert!(sa.is_deterministic());
    }

    #[test_log::test]
    fn cycles_are_expanded_once() {
        let aut = AutomatonBuilder::default()
            .with_states(["p"])
            .with_accepting_states(["q"])
            .with_transitions([
                ("p", "a", "p"),
                ("p", "a", "q"),
                ("p", "b", "q"),
                ("q", "b", "q"),
                ("q", "a", "p"),
            ])
            .with_initial_states(["p"])
            .build()
            .unwrap();
        let sa = determinize(&aut).unwrap();

        let (states, transitions) = shown(&sa);
        assert_eq!(states, vec!["{p}", "({p,q})", "({q})"]);
        assert_eq!(transitions.len(), 6);
        assert!(sa.transitions().all_unique());
        testing::assert_deterministic_equivalent(&aut, &sa, 6);
    }

    #[test_log::test]
    fn empty_initial_set_yields_single_sink() {
        let aut = AutomatonBuilder::default()
            .with_accepting_states(["q0"])
            .with_transitions([("q0", "a", "q0")])
            .build()
            .unwrap();
        let sa = determinize(&aut).unwrap();
        assert_eq!(sa.size(), 1);
        assert_eq!(sa.state(0).name(), "{}");
        assert!(!sa.state(0).is_accepting());
        assert_eq!(sa.transitions().count(), 0);
    }

    #[test_log::test]
    fn fixtures_determinize_equivalently() {
        for index in 1..=fixtures::COUNT {
            let original = fixtures::by_index(index).unwrap();
            let mut aut = original.clone();
            aut.eliminate_epsilons().unwrap();
            let sa = determinize(&aut).unwrap();

            assert!(sa.is_deterministic(), "fixture {index}");
            assert!(sa.transitions().all_unique(), "fixture {index}");
            for state in sa.states() {
                assert_eq!(
                    state.is_accepting(),
                    state.members().iter().any(|q| aut.state(q).is_accepting())
                );
            }
            testing::assert_reachable(&sa);
            testing::assert_deterministic_equivalent(&original, &sa, 5);
        }
    }

    #[cfg(feature = "random")]
    #[test_log::test]
    fn random_automata_determinize_equivalently() {
        fastrand::seed(0xd7a);
        for _ in 0..40 {
            let original = crate::random::random_automaton(5, 2, 0.3, 0.1).unwrap();
            let mut aut = original.clone();
            aut.eliminate_epsilons().unwrap();
            let sa = determinize(&aut).unwrap();
            assert!(sa.is_deterministic());
            testing::assert_reachable(&sa);
            testing::assert_deterministic_equivalent(&original, &sa, 5);
            for _ in 0..20 {
                let word = crate::random::random_word(original.alphabet(), 12);
                assert_eq!(
                    testing::accepts(&original, &word),
                    testing::super_accepts(&sa, &word),
                    "disagreement on {}",
                    word.show()
                );
            }
        }
    }
}
