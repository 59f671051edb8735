//! Brute-force acceptance checks used by the tests to compare languages.

use std::collections::VecDeque;

use itertools::Itertools;

use crate::{
    math::{OrderedSet, Set},
    prelude::*,
};

/// All states reachable from `states` through epsilon transitions, including `states`.
fn epsilon_closure<I: IntoIterator<Item = StateId>>(
    automaton: &Automaton,
    states: I,
) -> OrderedSet<StateId> {
    let mut closure: OrderedSet<StateId> = states.into_iter().collect();
    let mut queue: VecDeque<StateId> = closure.iter().copied().collect();
    while let Some(q) = queue.pop_front() {
        for t in automaton.state(q).outbound_on(&EPSILON) {
            if closure.insert(t.target()) {
                queue.push_back(t.target());
            }
        }
    }
    closure
}

/// Simulates `automaton` on `word` by tracking the set of states it can be in.
pub fn accepts(automaton: &Automaton, word: &[Symbol]) -> bool {
    let mut current = epsilon_closure(automaton, automaton.initial_states().iter().copied());
    for symbol in word {
        let next = current
            .iter()
            .flat_map(|q| automaton.state(*q).outbound_on(symbol))
            .map(Transition::target)
            .collect::<Vec<_>>();
        current = epsilon_closure(automaton, next);
    }
    current.iter().any(|q| automaton.state(*q).is_accepting())
}

/// Runs `automaton` on `word`, a missing successor rejects.
pub fn super_accepts(automaton: &SuperAutomaton, word: &[Symbol]) -> bool {
    let Some(mut current) = automaton.initial().map(SuperState::id) else {
        return false;
    };
    for symbol in word {
        match automaton.successor(current, symbol) {
            Some(next) => current = next,
            None => return false,
        }
    }
    automaton.state(current).is_accepting()
}

/// Every word over `alphabet` of length at most `max_len`, shortest first.
pub fn words(alphabet: &Alphabet, max_len: usize) -> Vec<Vec<Symbol>> {
    let mut words = vec![vec![]];
    for len in 1..=max_len {
        words.extend(
            itertools::repeat_n(alphabet.universe().cloned(), len).multi_cartesian_product(),
        );
    }
    words
}

/// Asserts that `left` and `right` agree on every word of length at most `max_len` over the
/// alphabet of `left`.
pub fn assert_equivalent(left: &Automaton, right: &Automaton, max_len: usize) {
    for word in words(left.alphabet(), max_len) {
        assert_eq!(
            accepts(left, &word),
            accepts(right, &word),
            "automata disagree on {}",
            word.show()
        );
    }
}

/// Asserts that `automaton` and its determinized version `det` agree on every word of length
/// at most `max_len`.
pub fn assert_deterministic_equivalent(
    automaton: &Automaton,
    det: &SuperAutomaton,
    max_len: usize,
) {
    for word in words(automaton.alphabet(), max_len) {
        assert_eq!(
            accepts(automaton, &word),
            super_accepts(det, &word),
            "determinized automaton disagrees on {}",
            word.show()
        );
    }
}

/// Asserts that every superstate can be reached from the initial one.
pub fn assert_reachable(automaton: &SuperAutomaton) {
    let Some(initial) = automaton.initial() else {
        return;
    };
    let mut seen: Set<SuperStateId> = Set::default();
    seen.insert(initial.id());
    let mut queue = VecDeque::from([initial.id()]);
    while let Some(q) = queue.pop_front() {
        for t in automaton.state(q).outbound().values() {
            if seen.insert(t.target()) {
                queue.push_back(t.target());
            }
        }
    }
    assert_eq!(seen.len(), automaton.size(), "some superstates are unreachable");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_words_by_length() {
        let alphabet = Alphabet::from_letters(["a", "b"]).unwrap();
        let words = words(&alphabet, 2);
        assert_eq!(words.len(), 7);
        assert!(words[0].is_empty());
        assert_eq!(words[6].show(), "\"bb\"");
    }

    #[test]
    fn simulation_follows_epsilon() {
        let aut = crate::fixtures::epsilon_fan().unwrap();
        let a = Symbol::letter("a");
        let b = Symbol::letter("b");
        assert!(accepts(&aut, &[]));
        assert!(accepts(&aut, &[a.clone()]));
        assert!(accepts(&aut, &[a.clone(), b.clone()]));
        assert!(!accepts(&aut, &[b]));
        assert!(!accepts(&aut, &[a.clone(), a]));
    }
}
