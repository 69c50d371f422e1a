//! Associative merge used at every level of the store.
//!
//! Keys only present on one side are kept; on a colliding key the collision
//! policy decides what the stored value becomes. Series years, area names and
//! area measures all go through [`merge_maps`].

use std::collections::BTreeMap;

/// Merge `incoming` into `existing`, calling `on_collision(stored, new)` for
/// every key present in both maps.
pub fn merge_maps<K, V, F>(existing: &mut BTreeMap<K, V>, incoming: BTreeMap<K, V>, mut on_collision: F)
where
    K: Ord,
    F: FnMut(&mut V, V),
{
    for (key, value) in incoming {
        match existing.get_mut(&key) {
            Some(stored) => on_collision(stored, value),
            None => {
                existing.insert(key, value);
            }
        }
    }
}

/// Collision policy: the incoming value replaces the stored one.
pub fn incoming_wins<V>(stored: &mut V, incoming: V) {
    *stored = incoming;
}
