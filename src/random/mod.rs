use crate::prelude::*;
use tracing::debug;

/// The largest alphabet [`random_automaton`] can generate, its letters are `a` to `z`.
pub const MAX_LETTERS: usize = 26;

/// Draws a random automaton with `states` states `q0, q1, ...` over the letters
/// `a, b, ...` (`symbols` many, at most [`MAX_LETTERS`]).
///
/// For every pair of states and every letter, the corresponding transition is inserted with
/// probability `density`. For every pair of distinct states an epsilon transition is inserted
/// with probability `epsilon_density`. Each state is accepting with probability one half and
/// `q0` is the only initial state.
///
/// Fails with [`AutomatonError::TooManyLetters`] if `symbols` exceeds [`MAX_LETTERS`].
pub fn random_automaton(
    states: usize,
    symbols: usize,
    density: f64,
    epsilon_density: f64,
) -> Result<Automaton, AutomatonError> {
    if symbols > MAX_LETTERS {
        return Err(AutomatonError::TooManyLetters(symbols));
    }
    let letters = (b'a'..).take(symbols).map(char::from).collect::<Vec<_>>();

    let mut automaton = Automaton::new();
    for letter in &letters {
        automaton.add_symbol(*letter)?;
    }
    let ids = (0..states)
        .map(|i| {
            automaton.add_state(format!("q{i}"), StateKind::from_accepting(fastrand::bool()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for &source in &ids {
        for &target in &ids {
            for letter in &letters {
                if fastrand::f64() < density {
                    automaton.add_transition(source, Symbol::from(*letter), target)?;
                }
            }
            if source != target && fastrand::f64() < epsilon_density {
                automaton.add_transition(source, EPSILON, target)?;
            }
        }
    }
    if let Some(&initial) = ids.first() {
        automaton.add_initial_state(initial)?;
    }

    debug!(
        "drew random automaton with {} states and {} transitions",
        automaton.size(),
        automaton.transitions().count()
    );
    Ok(automaton)
}

/// Generates a random word over `alphabet` whose length is drawn uniformly from `0..=max_len`.
pub fn random_word(alphabet: &Alphabet, max_len: usize) -> Vec<Symbol> {
    let letters = alphabet.universe().collect::<Vec<_>>();
    if letters.is_empty() {
        return vec![];
    }
    let length = fastrand::usize(0..=max_len);
    (0..length)
        .map(|_| letters[fastrand::usize(..letters.len())].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_automaton_shape() {
        fastrand::seed(7);
        let aut = random_automaton(6, 3, 0.2, 0.2).unwrap();
        assert_eq!(aut.size(), 6);
        assert_eq!(aut.alphabet().size(), 3);
        assert_eq!(aut.initial_states().len(), 1);
        assert!(aut
            .transitions()
            .all(|t| !t.is_epsilon() || t.source() != t.target()));

        let full = random_automaton(3, 2, 1.0, 0.0).unwrap();
        assert_eq!(full.transitions().count(), 3 * 3 * 2);
        assert!(full.is_epsilon_free());
    }

    #[test]
    fn alphabet_size_is_bounded() {
        let aut = random_automaton(2, MAX_LETTERS, 0.1, 0.0).unwrap();
        assert_eq!(aut.alphabet().size(), MAX_LETTERS);
        assert_eq!(
            random_automaton(3, MAX_LETTERS + 1, 0.1, 0.1).unwrap_err(),
            AutomatonError::TooManyLetters(MAX_LETTERS + 1)
        );
    }

    #[test]
    fn random_words_respect_bounds() {
        let alphabet = Alphabet::from_letters(["a", "b"]).unwrap();
        for _ in 0..20 {
            let word = random_word(&alphabet, 4);
            assert!(word.len() <= 4);
            assert!(word.iter().all(|s| alphabet.contains(s)));
        }
        assert!(random_word(&Alphabet::new(), 4).is_empty());
    }
}
