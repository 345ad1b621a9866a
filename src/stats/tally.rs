//! Parallel per-name accumulation over a delivery slice.
//!
//! Deliveries are folded into partial tallies across the rayon pool and the
//! partials are merged. Each name remembers the smallest ordering key it was
//! seen at, so the merged output comes back in store order no matter how the
//! work was split.

use crate::storage::Delivery;
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Combine two partial accumulations for the same name
pub(crate) trait Merge {
    fn merge(&mut self, other: Self);
}

impl Merge for u64 {
    fn merge(&mut self, other: Self) {
        *self += other;
    }
}

pub(crate) struct NameTally<T> {
    slots: HashMap<String, (usize, T)>,
}

impl<T> Default for NameTally<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<T: Default + Merge> NameTally<T> {
    /// Accumulator for `name`, first seen at ordering key `seen_at`
    pub(crate) fn entry(&mut self, name: &str, seen_at: usize) -> &mut T {
        let slot = self
            .slots
            .entry(name.to_string())
            .or_insert_with(|| (seen_at, T::default()));
        slot.0 = slot.0.min(seen_at);
        &mut slot.1
    }

    fn merge(mut self, other: Self) -> Self {
        for (name, (seen_at, value)) in other.slots {
            match self.slots.entry(name) {
                Entry::Occupied(mut occupied) => {
                    let slot = occupied.get_mut();
                    slot.0 = slot.0.min(seen_at);
                    slot.1.merge(value);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert((seen_at, value));
                }
            }
        }
        self
    }

    /// Drain into `(name, value)` pairs ordered by first appearance
    fn into_ordered(self) -> Vec<(String, T)> {
        let mut entries: Vec<(usize, String, T)> = self
            .slots
            .into_iter()
            .map(|(name, (seen_at, value))| (seen_at, name, value))
            .collect();
        entries.sort_by_key(|(seen_at, _, _)| *seen_at);
        entries
            .into_iter()
            .map(|(_, name, value)| (name, value))
            .collect()
    }
}

/// Fold every delivery through `record` and return per-name totals in first-seen order.
///
/// `record` receives the delivery's position in the slice; callers derive
/// ordering keys from it.
pub(crate) fn tally_by_name<T, F>(deliveries: &[Delivery], record: F) -> Vec<(String, T)>
where
    T: Default + Merge + Send,
    F: Fn(&mut NameTally<T>, usize, &Delivery) + Sync,
{
    deliveries
        .par_iter()
        .enumerate()
        .fold(NameTally::default, |mut tally, (index, delivery)| {
            record(&mut tally, index, delivery);
            tally
        })
        .reduce(NameTally::default, NameTally::merge)
        .into_ordered()
}

/// Treat blank names as absent attribution
pub(crate) fn present(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(name)
    }
}
