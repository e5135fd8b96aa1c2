use std::marker::PhantomData;

use crate::DominanceChecker;


/// A dominance checker that never rejects anything. Using it turns the
/// drivers into plain (exhaustive) tree searches.
pub struct EmptyDominanceChecker<T>
{
    _phantom: PhantomData<T>,
}

impl<T> Default for EmptyDominanceChecker<T> {
    fn default() -> Self {
        Self { _phantom: Default::default() }
    }
}

impl<T> DominanceChecker for EmptyDominanceChecker<T> {
    type Node = T;

    fn is_dominated_or_insert(&self, _: &Self::Node) -> bool {
        false
    }

    fn clear(&self) {}

    fn is_exact(&self) -> bool {
        true
    }
}
