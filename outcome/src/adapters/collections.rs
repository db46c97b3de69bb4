//! Bounds-checked and key-checked access into collections.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use super::reject;
use crate::{AdapterError, Outcome, succeed};

/// Borrow the item at `index`.
///
/// ```
/// use outcome::adapters::collections::at;
///
/// let hosts = ["alpha", "beta"];
/// assert_eq!(at(&hosts, 1).get_or(&"none"), &"beta");
/// assert!(at(&hosts, 2).is_failure());
/// ```
pub fn at<T>(items: &[T], index: usize) -> Outcome<&T, AdapterError> {
    items.get(index).map_or_else(
        || reject(AdapterError::index_out_of_bounds(index, items.len())),
        succeed,
    )
}

/// Borrow the value stored under `key` in a hash map.
pub fn lookup<'a, K, V, Q, S>(map: &'a HashMap<K, V, S>, key: &Q) -> Outcome<&'a V, AdapterError>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Debug + Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map.get(key)
        .map_or_else(|| reject(AdapterError::missing_key(key)), succeed)
}

/// Borrow the value stored under `key` in an ordered map.
pub fn lookup_sorted<'a, K, V, Q>(map: &'a BTreeMap<K, V>, key: &Q) -> Outcome<&'a V, AdapterError>
where
    K: Borrow<Q> + Ord,
    Q: Debug + Ord + ?Sized,
{
    map.get(key)
        .map_or_else(|| reject(AdapterError::missing_key(key)), succeed)
}
