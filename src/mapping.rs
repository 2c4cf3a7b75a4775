//! Accessors and transforms over [`HashMap`].
//!
//! Every function is generic over the map's [`BuildHasher`], so maps built
//! with `rustc_hash` or `ahash` hashers work as well as the standard one.
//!
//! - [`get_or_default`]: lookup with a fallback value
//! - [`keys`], [`values`]: extract keys or values
//! - [`map_keys`], [`map_values`]: apply a function to every entry
//! - [`merge`]: combine maps, last write wins
//! - [`pick`], [`omit`]: keep or drop a set of keys
//!
//! Functions returning a `Vec` follow the map's iteration order, which is
//! unspecified.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use fusion::mapping::{merge, omit, pick};
//!
//! let defaults = HashMap::from([("color", "red"), ("size", "m")]);
//! let overrides = HashMap::from([("size", "xl")]);
//!
//! let settings = merge(&[&defaults, &overrides]);
//! assert_eq!(settings["size"], "xl");
//!
//! assert_eq!(pick(&settings, &["color"]), HashMap::from([("color", "red")]));
//! assert_eq!(omit(&settings, &["color"]), HashMap::from([("size", "xl")]));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::hashing::{MembershipSet, membership_set};

/// Returns a clone of the value for `key`, or `default` when it is absent.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fusion::mapping::get_or_default;
///
/// let ages = HashMap::from([("alice".to_string(), 30)]);
/// assert_eq!(get_or_default(&ages, "alice", 0), 30);
/// assert_eq!(get_or_default(&ages, "bob", 0), 0);
/// ```
pub fn get_or_default<K, V, S, Q>(map: &HashMap<K, V, S>, key: &Q, default: V) -> V
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    V: Clone,
    S: BuildHasher,
{
    map.get(key).cloned().unwrap_or(default)
}

/// Returns every key of `map`.
pub fn keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone,
{
    map.keys().cloned().collect()
}

/// Returns every value of `map`.
pub fn values<K, V, S>(map: &HashMap<K, V, S>) -> Vec<V>
where
    V: Clone,
{
    map.values().cloned().collect()
}

/// Applies `function` to every entry of `map`, collecting the results.
///
/// Intended for deriving a new key from each entry.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fusion::mapping::map_keys;
///
/// let stock = HashMap::from([("apple", 3)]);
/// assert_eq!(map_keys(&stock, |key, _| key.to_uppercase()), vec!["APPLE".to_string()]);
/// ```
pub fn map_keys<K, V, S, R, F>(map: &HashMap<K, V, S>, mut function: F) -> Vec<R>
where
    F: FnMut(&K, &V) -> R,
{
    map.iter().map(|(key, value)| function(key, value)).collect()
}

/// Applies `function` to every entry of `map`, collecting the results.
///
/// Intended for deriving a new value from each entry.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use fusion::mapping::map_values;
///
/// let stock = HashMap::from([("apple", 3)]);
/// assert_eq!(map_values(&stock, |_, count| count * 10), vec![30]);
/// ```
pub fn map_values<K, V, S, R, F>(map: &HashMap<K, V, S>, mut function: F) -> Vec<R>
where
    F: FnMut(&K, &V) -> R,
{
    map.iter().map(|(key, value)| function(key, value)).collect()
}

/// Merges `maps` into a new map.
///
/// When a key appears in several maps, the value from the last of them wins.
pub fn merge<K, V, S, M>(maps: &[M]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
    M: Borrow<HashMap<K, V, S>>,
{
    let capacity = maps.iter().map(|map| map.borrow().len()).max().unwrap_or(0);
    let mut merged = HashMap::with_capacity_and_hasher(capacity, S::default());
    for map in maps {
        merged.extend(
            map.borrow()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
    merged
}

/// Returns a new map holding only the listed `keys` that are present in `input`.
pub fn pick<K, V, S>(input: &HashMap<K, V, S>, keys: &[K]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut picked = HashMap::with_capacity_and_hasher(keys.len(), S::default());
    for key in keys {
        if let Some(value) = input.get(key) {
            picked.insert(key.clone(), value.clone());
        }
    }
    picked
}

/// Returns a new map holding every entry of `input` except the listed `keys`.
pub fn omit<K, V, S>(input: &HashMap<K, V, S>, keys: &[K]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
{
    let mut omitted: MembershipSet<&K> = membership_set(keys.len());
    omitted.extend(keys);

    input
        .iter()
        .filter(|(key, _)| !omitted.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
