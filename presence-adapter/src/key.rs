#[cfg(feature = "std")]
pub trait ReconcilerKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> ReconcilerKey for T {}

#[cfg(not(feature = "std"))]
pub trait ReconcilerKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> ReconcilerKey for T {}
