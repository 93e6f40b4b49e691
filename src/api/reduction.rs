///
/// The result of a single step of a reduction
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Reduction<Acc> {
    /// Carry on folding with this accumulator
    Continue(Acc),

    /// Stop folding immediately: this value is the result of the reduction
    Stop(Acc)
}

impl<Acc> Reduction<Acc> {
    ///
    /// True if this step requested that the reduction stops
    ///
    #[inline]
    pub fn is_stop(&self) -> bool {
        match self {
            Reduction::Continue(_)  => false,
            Reduction::Stop(_)      => true
        }
    }

    ///
    /// Unwraps the accumulator from this step
    ///
    #[inline]
    pub fn into_inner(self) -> Acc {
        match self {
            Reduction::Continue(acc)    => acc,
            Reduction::Stop(acc)        => acc
        }
    }
}
