use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::prelude::*;

/// Helper trait which can be used to display states, transitions and automata.
pub trait Show {
    /// Returns a human readable representation of `self`. Accepting states are wrapped in
    /// parentheses, e.g. `(q2)`, so that they can be told apart without colors.
    fn show(&self) -> String;
}

impl<S: Show> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

impl Show for [Symbol] {
    fn show(&self) -> String {
        format!("\"{}\"", self.iter().map(Symbol::label).join(""))
    }
}

fn listing<S, T>(states: S, transitions: T) -> String
where
    S: IntoIterator<Item = String>,
    T: IntoIterator<Item = String>,
{
    format!(
        "---------- STATES ----------\n{}\n---------TRANSITION---------\n{}----------------------------\n",
        states.into_iter().join(" "),
        transitions
            .into_iter()
            .map(|line| format!("{line}\n"))
            .join("")
    )
}

impl Show for Automaton {
    /// Lists the states in insertion order followed by the transitions, sorted by source,
    /// symbol and target.
    fn show(&self) -> String {
        listing(
            self.states().map(Show::show),
            self.sorted_transitions().into_iter().map(|t| t.show_in(self)),
        )
    }
}

impl Show for SuperAutomaton {
    /// Lists the superstates in discovery order followed by the transitions in the order they
    /// were created.
    fn show(&self) -> String {
        listing(
            self.states().iter().map(Show::show),
            self.transitions().map(|t| t.show_in(self)),
        )
    }
}

fn decorate(shown: String, initial: bool, accepting: bool) -> String {
    let shown = if initial { format!("→ {shown}") } else { shown };
    if accepting {
        shown.bold().green().to_string()
    } else {
        shown
    }
}

impl Automaton {
    /// Renders the transition table with one row per state and one column per letter, plus a
    /// column for epsilon if there are epsilon transitions. Initial states are marked with an
    /// arrow and accepting states are highlighted.
    pub fn transition_table(&self) -> String {
        let mut columns = self.alphabet().universe().cloned().collect::<Vec<_>>();
        if !self.is_epsilon_free() {
            columns.insert(0, EPSILON);
        }

        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(columns.iter().map(Symbol::to_string)),
        );
        for state in self.states() {
            let mut row = vec![decorate(
                state.show(),
                self.initial_states().contains(&state.id()),
                state.is_accepting(),
            )];
            for symbol in &columns {
                let targets = state
                    .outbound_on(symbol)
                    .iter()
                    .map(|t| self.state(t.target()).name())
                    .sorted()
                    .join(", ");
                row.push(if targets.is_empty() {
                    "-".to_string()
                } else {
                    format!("{{{targets}}}")
                });
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl SuperAutomaton {
    /// Renders the transition table of the determinized automaton, the initial superstate is
    /// marked with an arrow and accepting superstates are highlighted.
    pub fn transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string())
                .chain(self.alphabet().universe().map(Symbol::to_string)),
        );
        for state in self.states() {
            let mut row = vec![decorate(state.show(), state.id() == 0, state.is_accepting())];
            for symbol in self.alphabet().universe() {
                row.push(
                    state
                        .successor(symbol)
                        .map(|q| self.state(q).name().to_string())
                        .unwrap_or_else(|| "-".to_string()),
                );
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::{fixtures, prelude::*};

    #[test]
    fn automaton_listing() {
        let mut aut = fixtures::looping_start().unwrap();
        assert_eq!(
            aut.show(),
            "---------- STATES ----------\n\
             q0 q1 (q2)\n\
             ---------TRANSITION---------\n\
             q0, ε --> (q2)\n\
             q0, x --> q0\n\
             q0, x --> q1\n\
             q0, y --> q0\n\
             q1, ε --> (q2)\n\
             q1, y --> q0\n\
             q1, y --> (q2)\n\
             ----------------------------\n"
        );
        aut.eliminate_epsilons().unwrap();
        assert!(aut.show().starts_with(
            "---------- STATES ----------\n(q0) (q1) (q2)\n"
        ));
    }

    #[test]
    fn superautomaton_listing() {
        let aut = AutomatonBuilder::default()
            .with_states(["q0", "q1", "q2"])
            .with_accepting_states(["q3"])
            .with_transitions([("q0", "a", "q2"), ("q1", "a", "q3")])
            .with_initial_states(["q0", "q1"])
            .build()
            .unwrap();
        let sa = determinize(&aut).unwrap();
        assert_eq!(
            sa.show(),
            "---------- STATES ----------\n\
             {q0,q1} ({q2,q3})\n\
             ---------TRANSITION---------\n\
             {q0,q1}, a --> ({q2,q3})\n\
             ----------------------------\n"
        );
    }

    #[test]
    fn tables_list_every_state() {
        let aut = fixtures::diamond_tail().unwrap();
        let table = aut.transition_table();
        for state in aut.states() {
            assert!(table.contains(state.name()));
        }
        assert!(table.contains("{q1, q4}"));
        assert!(table.contains('ε'));

        let mut aut = aut;
        aut.eliminate_epsilons().unwrap();
        let sa = determinize(&aut).unwrap();
        let table = sa.transition_table();
        for state in sa.states() {
            assert!(table.contains(state.name()));
        }
    }
}
