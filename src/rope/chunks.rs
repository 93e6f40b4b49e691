use super::node::*;

use crate::api::*;

use bytes::Bytes;

use std::iter::{FusedIterator};
use std::vec;

///
/// Iterator over the chunks of a rope, from left to right
///
/// The rope is flattened when the iterator is created: request a new iterator to read the
/// chunks again.
///
pub struct Chunks<'a> {
    /// The flattened chunks that are still to be returned
    remaining: vec::IntoIter<&'a Bytes>
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a Bytes;

    #[inline]
    fn next(&mut self) -> Option<&'a Bytes> {
        self.remaining.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Chunks<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a Bytes> {
        self.remaining.next_back()
    }
}

impl<'a> ExactSizeIterator for Chunks<'a> { }
impl<'a> FusedIterator for Chunks<'a> { }

impl Rope {
    ///
    /// Writes references to the chunks in this rope to the end of `target` in left-to-right
    /// order, returning the index after the last chunk written
    ///
    /// The tree is walked with an explicit stack, so unusually deep ropes can't overflow the
    /// call stack here.
    ///
    pub fn populate<'a>(&'a self, target: &mut Vec<&'a Bytes>) -> usize {
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                Rope::Leaf(leaf) => {
                    target.push(leaf.chunk());
                }

                Rope::Concat(concat) => {
                    // Right is pushed first so that left is visited first
                    pending.push(concat.right());
                    pending.push(concat.left());
                }
            }
        }

        target.len()
    }

    ///
    /// Flattens this rope into an ordered list of its chunks
    ///
    pub fn seq(&self) -> Vec<&Bytes> {
        let mut chunks = Vec::with_capacity(self.count());
        self.populate(&mut chunks);

        chunks
    }

    ///
    /// Iterates over the chunks in this rope
    ///
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            remaining: self.seq().into_iter()
        }
    }

    ///
    /// Iterates over the individual bytes in this rope
    ///
    pub fn bytes(&self) -> impl '_+Iterator<Item=u8> {
        self.chunks()
            .flat_map(|chunk| chunk.iter().copied())
    }

    ///
    /// Copies the contents of this rope into a single contiguous vector
    ///
    pub fn to_vec(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.size());

        for chunk in self.chunks() {
            result.extend_from_slice(chunk);
        }

        result
    }

    ///
    /// As for `to_vec()`, but reports a failure to allocate the vector instead of aborting
    ///
    pub fn try_to_vec(&self) -> Result<Vec<u8>, RopeError> {
        let size        = self.size();
        let mut result  = Vec::new();

        result.try_reserve_exact(size)
            .map_err(|source| RopeError::AllocationFailed { size, source })?;

        for chunk in self.chunks() {
            result.extend_from_slice(chunk);
        }

        Ok(result)
    }
}

impl<'a> IntoIterator for &'a Rope {
    type Item       = &'a Bytes;
    type IntoIter   = Chunks<'a>;

    fn into_iter(self) -> Chunks<'a> {
        self.chunks()
    }
}

impl ChunkSequence for Rope {
    type Chunk = Bytes;

    #[inline]
    fn count(&self) -> usize {
        Rope::count(self)
    }

    fn chunks<'a>(&'a self) -> Box<dyn 'a+Iterator<Item=&'a Bytes>> {
        Box::new(Rope::chunks(self))
    }

    fn seq(&self) -> Vec<&Bytes> {
        Rope::seq(self)
    }
}

impl Reducible for Rope {
    type Item = Bytes;

    ///
    /// Folds over the chunks in this rope, using the first chunk as the initial value
    ///
    /// A rope made of a single chunk returns that chunk without calling the function.
    ///
    fn reduce<ReduceFn>(&self, reduce_fn: ReduceFn) -> Bytes
    where
    ReduceFn: FnMut(Bytes, Bytes) -> Reduction<Bytes> {
        let mut reduce_fn   = reduce_fn;
        let mut chunks      = Rope::chunks(self).cloned();

        // Every rope has at least one chunk (an empty rope is a leaf with an empty chunk)
        let mut result      = match chunks.next() {
            Some(first) => first,
            None        => { return Bytes::new(); }
        };

        for chunk in chunks {
            match reduce_fn(result, chunk) {
                Reduction::Continue(next)   => { result = next; }
                Reduction::Stop(last)       => { return last; }
            }
        }

        result
    }

    ///
    /// Folds over the chunks in this rope, starting from a seed value
    ///
    fn reduce_with<Acc, ReduceFn>(&self, seed: Acc, reduce_fn: ReduceFn) -> Acc
    where
    ReduceFn: FnMut(Acc, Bytes) -> Reduction<Acc> {
        let mut reduce_fn   = reduce_fn;
        let mut result      = seed;

        for chunk in Rope::chunks(self).cloned() {
            match reduce_fn(result, chunk) {
                Reduction::Continue(next)   => { result = next; }
                Reduction::Stop(last)       => { return last; }
            }
        }

        result
    }
}
