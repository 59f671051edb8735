//! Hand-written epsilon automata used by the demo binary and the tests.

use crate::prelude::*;

/// The number of fixtures reachable through [`by_index`].
pub const COUNT: usize = 5;

/// Returns the fixture with the given index, counting from 1.
pub fn by_index(index: usize) -> Result<Automaton, AutomatonError> {
    match index {
        1 => branching_tail(),
        2 => looping_start(),
        3 => epsilon_fan(),
        4 => dense_cycle(),
        5 => diamond_tail(),
        _ => Err(AutomatonError::UnknownFixture(index)),
    }
}

fn states(range: std::ops::Range<usize>) -> impl Iterator<Item = String> {
    range.map(|i| format!("q{i}"))
}

/// Two branches from `q1` that meet again in `q2`, which moves to the accepting `q3` by epsilon.
pub fn branching_tail() -> Result<Automaton, AutomatonError> {
    AutomatonBuilder::default()
        .with_states(states(0..3))
        .with_accepting_states(["q3"])
        .with_states(["q4", "q5"])
        .with_alphabet(["x", "y"])
        .with_transitions([
            ("q0", "x", "q1"),
            ("q1", "x", "q2"),
            ("q1", "x", "q5"),
            ("q5", "y", "q2"),
            ("q1", "y", "q4"),
        ])
        .with_epsilon_transitions([("q2", "q3"), ("q4", "q2")])
        .with_initial_states(["q0"])
        .build()
}

/// A looping initial state `q0` that, like `q1`, reaches the accepting `q2` by epsilon.
pub fn looping_start() -> Result<Automaton, AutomatonError> {
    AutomatonBuilder::default()
        .with_states(states(0..2))
        .with_accepting_states(["q2"])
        .with_alphabet(["x", "y"])
        .with_transitions([
            ("q0", "x", "q0"),
            ("q0", "y", "q0"),
            ("q0", "x", "q1"),
            ("q1", "y", "q2"),
            ("q1", "y", "q0"),
        ])
        .with_epsilon_transitions([("q0", "q2"), ("q1", "q2")])
        .with_initial_states(["q0"])
        .build()
}

/// An initial state fanning out into an epsilon chain and an `a`/`b` path, with two accepting
/// states `q5` and `q6`.
pub fn epsilon_fan() -> Result<Automaton, AutomatonError> {
    AutomatonBuilder::default()
        .with_states(states(0..5))
        .with_accepting_states(["q5", "q6"])
        .with_alphabet(["a", "b"])
        .with_transitions([("q3", "a", "q4"), ("q4", "b", "q5")])
        .with_epsilon_transitions([
            ("q0", "q1"),
            ("q1", "q2"),
            ("q2", "q5"),
            ("q0", "q3"),
            ("q4", "q6"),
        ])
        .with_initial_states(["q0"])
        .build()
}

/// Four states with cycles through both letters and epsilon.
pub fn dense_cycle() -> Result<Automaton, AutomatonError> {
    AutomatonBuilder::default()
        .with_states(states(0..3))
        .with_accepting_states(["q3"])
        .with_alphabet(["x", "y"])
        .with_transitions([
            ("q0", "x", "q1"),
            ("q0", "y", "q2"),
            ("q1", "y", "q3"),
            ("q2", "x", "q0"),
            ("q2", "x", "q3"),
            ("q2", "y", "q1"),
            ("q3", "x", "q0"),
        ])
        .with_epsilon_transitions([("q0", "q3"), ("q1", "q2"), ("q2", "q3")])
        .with_initial_states(["q0"])
        .build()
}

/// Two `c`/`d` paths from `q1` that join in `q3`, which reaches the accepting `q5` by epsilon.
pub fn diamond_tail() -> Result<Automaton, AutomatonError> {
    AutomatonBuilder::default()
        .with_states(states(0..5))
        .with_accepting_states(["q5"])
        .with_alphabet(["a", "c", "d"])
        .with_transitions([
            ("q0", "a", "q1"),
            ("q1", "c", "q1"),
            ("q1", "d", "q2"),
            ("q1", "c", "q4"),
            ("q2", "c", "q3"),
            ("q3", "c", "q3"),
            ("q4", "d", "q3"),
        ])
        .with_epsilon_transitions([("q0", "q1"), ("q3", "q5")])
        .with_initial_states(["q0"])
        .build()
}
