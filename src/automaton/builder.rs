use crate::prelude::*;

/// Helper struct for the construction of an [`Automaton`] from state names. States have to be
/// declared before `build` resolves the transitions and initial states that mention them.
///
/// # Example
///
/// We want an automaton over `x` and `y` with states `q0`, `q1` and an accepting state `q2`,
/// where `q0` is initial, `q0` reads `x` into `q1` and both `q0` and `q1` move to `q2` without
/// reading anything.
/// ```
/// use superautomata::prelude::*;
///
/// let automaton = AutomatonBuilder::default()
///     .with_states(["q0", "q1"])
///     .with_accepting_states(["q2"])
///     .with_alphabet(["x", "y"])
///     .with_transitions([("q0", "x", "q1")])
///     .with_epsilon_transitions([("q0", "q2"), ("q1", "q2")])
///     .with_initial_states(["q0"])
///     .build()
///     .unwrap();
/// assert_eq!(automaton.size(), 3);
/// assert_eq!(automaton.epsilon_transitions().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<(String, StateKind)>,
    alphabet: Vec<Symbol>,
    transitions: Vec<(String, Symbol, String)>,
    initial: Vec<String>,
}

impl AutomatonBuilder {
    /// Declares ordinary states, in order.
    pub fn with_states<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |acc, name| acc.with_state(name, StateKind::Ordinary))
    }

    /// Declares accepting states, in order.
    pub fn with_accepting_states<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(self, |acc, name| acc.with_state(name, StateKind::Accepting))
    }

    /// Declares a single state with the given status.
    pub fn with_state<S: Into<String>>(mut self, name: S, kind: StateKind) -> Self {
        self.states.push((name.into(), kind));
        self
    }

    /// Adds letters to the alphabet. Letters that only appear on transitions are added
    /// automatically, this is needed for letters that label no transition at all.
    pub fn with_alphabet<I, S>(mut self, letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.alphabet.extend(letters.into_iter().map(Into::into));
        self
    }

    /// Adds transitions given as `(source, letter, target)`.
    pub fn with_transitions<I, S, L>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, L, S)>,
        S: Into<String>,
        L: Into<Symbol>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(p, a, q)| (p.into(), a.into(), q.into())),
        );
        self
    }

    /// Adds epsilon transitions given as `(source, target)`.
    pub fn with_epsilon_transitions<I, S>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.transitions.extend(
            transitions
                .into_iter()
                .map(|(p, q)| (p.into(), EPSILON, q.into())),
        );
        self
    }

    /// Marks the named states as initial.
    pub fn with_initial_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial.extend(names.into_iter().map(Into::into));
        self
    }

    /// Builds the automaton, resolving every name to the state it refers to.
    pub fn build(self) -> Result<Automaton, AutomatonError> {
        let mut automaton = Automaton::new();
        for (name, kind) in self.states {
            automaton.add_state(name, kind)?;
        }
        for letter in self.alphabet {
            automaton.add_symbol(letter)?;
        }

        let resolve = |automaton: &Automaton, name: &str| {
            automaton
                .state_id(name)
                .ok_or_else(|| AutomatonError::UnknownState(name.to_string()))
        };
        for (source, symbol, target) in self.transitions {
            let source = resolve(&automaton, &source)?;
            let target = resolve(&automaton, &target)?;
            automaton.add_transition(source, symbol, target)?;
        }
        for name in self.initial {
            let q = resolve(&automaton, &name)?;
            automaton.add_initial_state(q)?;
        }
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn declaration_order_determines_indices() {
        let aut = AutomatonBuilder::default()
            .with_states(["b"])
            .with_accepting_states(["a"])
            .with_states(["c"])
            .with_alphabet(["z"])
            .with_transitions([("a", "x", "b")])
            .build()
            .unwrap();
        assert_eq!(
            aut.states().map(State::name).collect::<Vec<_>>(),
            vec!["b", "a", "c"]
        );
        assert_eq!(aut.state_id("a"), Some(1));
        assert_eq!(aut.alphabet().show(), "{z, x}");
        assert!(aut.initial_states().is_empty());
    }

    #[test]
    fn unknown_names_are_reported() {
        let result = AutomatonBuilder::default()
            .with_states(["q0"])
            .with_transitions([("q0", "a", "q9")])
            .build();
        assert_eq!(result.unwrap_err(), AutomatonError::UnknownState("q9".into()));

        let result = AutomatonBuilder::default()
            .with_states(["q0"])
            .with_initial_states(["nope"])
            .build();
        assert_eq!(result.unwrap_err(), AutomatonError::UnknownState("nope".into()));
    }

    #[test]
    fn duplicate_declarations_fail() {
        let result = AutomatonBuilder::default()
            .with_states(["q0"])
            .with_accepting_states(["q0"])
            .build();
        assert_eq!(result.unwrap_err(), AutomatonError::DuplicateState("q0".into()));
    }
}
