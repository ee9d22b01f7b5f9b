#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, T> = HashMap<K, T>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, T> = BTreeMap<K, T>;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

#[cfg(feature = "std")]
#[doc(hidden)]
pub trait PresenceKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> PresenceKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait PresenceKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> PresenceKey for K {}
