//!
//! # Property test strategies
//!
//! Strategies that generate ropes along with the bytes they should contain. The ropes are built
//! from randomly chosen chunk boundaries joined in a random order, so the same content can
//! turn up with many different tree shapes.
//!
//! Enabled by the `proptest` feature.
//!

use crate::rope::*;

use ::proptest::prelude::*;
use ::proptest::collection::vec;
use ::proptest::sample::Index;

use bytes::Bytes;

/// The largest rope content generated by `arb_rope`
const MAX_CONTENT_LENGTH: usize = 96;

/// The largest number of extra chunk boundaries to cut content at
const MAX_CUTS: usize = 12;

/// The largest number of random merges performed while building a rope
const MAX_MERGES: usize = 16;

///
/// The ways that two neighbouring ropes can be combined without changing their order
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MergeStep {
    /// `left.append(right)`
    Append,

    /// `right.prepend(left)`
    Prepend,

    /// `Rope::join(left, right)`
    Join
}

impl Arbitrary for MergeStep {
    type Parameters = ();
    type Strategy   = BoxedStrategy<MergeStep>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        prop_oneof![
            Just(MergeStep::Append),
            Just(MergeStep::Prepend),
            Just(MergeStep::Join)
        ].boxed()
    }
}

///
/// Builds a rope from some content, cutting it into chunks at the specified points and then
/// merging neighbouring chunks in the order given by `merges`
///
/// Any ropes left over once the merges run out are appended from left to right.
///
pub fn shape_rope(content: &[u8], cuts: &[usize], merges: &[(Index, MergeStep)]) -> Rope {
    let mut boundaries = cuts.iter()
        .map(|cut| (*cut).min(content.len()))
        .chain([0, content.len()])
        .collect::<Vec<_>>();
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut ropes = boundaries.windows(2)
        .map(|range| Rope::wrap(Bytes::copy_from_slice(&content[range[0]..range[1]])))
        .collect::<Vec<_>>();

    for (index, step) in merges {
        if ropes.len() < 2 { break; }

        let pos     = index.index(ropes.len() - 1);
        let right   = ropes.remove(pos + 1);
        let left    = &ropes[pos];

        let merged  = match step {
            MergeStep::Append   => left.append(&right),
            MergeStep::Prepend  => right.prepend(left),
            MergeStep::Join     => Rope::join(left, &right)
        };

        ropes[pos] = merged;
    }

    ropes.iter()
        .fold(Rope::empty(), |rope, next| rope.append(next))
}

///
/// Generates a rope with a random shape containing the specified bytes
///
pub fn arb_shaped_rope(content: Vec<u8>) -> impl Strategy<Value=Rope> {
    let len = content.len();

    (vec(0..=len, 0..MAX_CUTS), vec((any::<Index>(), any::<MergeStep>()), 0..MAX_MERGES))
        .prop_map(move |(cuts, merges)| shape_rope(&content, &cuts, &merges))
}

///
/// Generates some bytes and a rope containing them
///
pub fn arb_rope() -> impl Strategy<Value=(Vec<u8>, Rope)> {
    vec(any::<u8>(), 0..MAX_CONTENT_LENGTH)
        .prop_flat_map(|content| (Just(content.clone()), arb_shaped_rope(content)))
}

///
/// Generates some bytes and two independently shaped ropes that both contain them
///
pub fn arb_rope_pair() -> impl Strategy<Value=(Vec<u8>, Rope, Rope)> {
    vec(any::<u8>(), 0..MAX_CONTENT_LENGTH)
        .prop_flat_map(|content| (Just(content.clone()), arb_shaped_rope(content.clone()), arb_shaped_rope(content)))
}
