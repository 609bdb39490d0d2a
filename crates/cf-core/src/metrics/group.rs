use crate::types::Event;
use std::collections::HashMap;
use std::hash::Hash;

/// Keyed accumulators that remember the order keys were first seen in.
pub(crate) struct Grouped<K, A> {
    index: HashMap<K, usize>,
    groups: Vec<(K, A)>,
}

impl<K, A> Grouped<K, A>
where
    K: Hash + Eq + Clone,
    A: Default,
{
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    pub(crate) fn entry(&mut self, key: K) -> &mut A {
        let slot = match self.index.get(&key) {
            Some(slot) => *slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(key.clone(), slot);
                self.groups.push((key, A::default()));
                slot
            }
        };
        &mut self.groups[slot].1
    }

    pub(crate) fn into_vec(self) -> Vec<(K, A)> {
        self.groups
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub total: usize,
    pub engaged: usize,
    pub converted: usize,
}

impl Tally {
    pub(crate) fn add(&mut self, event: &Event) {
        self.total += 1;
        self.engaged += usize::from(event.engaged);
        self.converted += usize::from(event.converted);
    }
}

/// `numerator / denominator` as a percentage; the denominator is floored at 1.
pub(crate) fn percentage(numerator: usize, denominator: usize) -> f64 {
    100.0 * numerator as f64 / denominator.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_keeps_first_seen_order() {
        let mut grouped: Grouped<&str, usize> = Grouped::new();
        for key in ["b", "a", "b", "c", "a", "b"] {
            *grouped.entry(key) += 1;
        }
        assert_eq!(grouped.into_vec(), vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_percentage_floors_denominator() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(3, 0), 300.0);
    }
}
