use super::reduction::*;

///
/// A sequence that can be folded over, with support for stopping early
///
pub trait Reducible {
    /// The type of element passed to the folding function
    type Item;

    ///
    /// Folds over the elements of this sequence with no seed: the first element is used as the
    /// initial accumulator. Sequences implementing this trait always contain at least one element.
    ///
    /// If the folding function returns `Reduction::Stop`, the fold ends and the value it contains
    /// is the result.
    ///
    fn reduce<ReduceFn>(&self, reduce_fn: ReduceFn) -> Self::Item
    where
    ReduceFn: FnMut(Self::Item, Self::Item) -> Reduction<Self::Item>;

    ///
    /// Folds over the elements of this sequence starting from a seed value
    ///
    fn reduce_with<Acc, ReduceFn>(&self, seed: Acc, reduce_fn: ReduceFn) -> Acc
    where
    ReduceFn: FnMut(Acc, Self::Item) -> Reduction<Acc>;
}
