use std::collections::{BTreeMap, BTreeSet};

/// Type alias for sets that preserve insertion order, we use this to hide which
/// hasher we are actually using.
pub type Set<S> = indexmap::IndexSet<S, fxhash::FxBuildHasher>;

/// Type alias for maps that preserve insertion order.
pub type Map<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// Type alias for sets whose iteration order is given by the ordering on `S`.
pub type OrderedSet<S> = BTreeSet<S>;

/// Type alias for maps whose iteration order is given by the ordering on `K`.
pub type OrderedMap<K, V> = BTreeMap<K, V>;

/// A set of state indices. This is the canonical representation of the states that a
/// [`crate::superautomaton::SuperState`] subsumes, two state sets are equal if and only if
/// they contain the same indices.
pub type StateSet = bit_set::BitSet;

/// Creates an empty [`StateSet`] that can hold indices below `capacity` without reallocating.
/// Sets that are compared or hashed against each other are all created with the same capacity.
pub fn state_set(capacity: usize) -> StateSet {
    StateSet::with_capacity(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_sets_iterate_in_index_order() {
        let mut set = state_set(8);
        set.extend([5, 1, 3, 1]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(set.len(), 3);
    }
}
