///
/// Represents a read-only sequence of chunks. Every element of the sequence is a whole chunk
/// rather than an individual cell.
///
pub trait ChunkSequence {
    /// A chunk in the sequence. For a byte rope this is a `Bytes` buffer
    type Chunk;

    ///
    /// Returns the number of chunks in this sequence (not the number of bytes)
    ///
    fn count(&self) -> usize;

    ///
    /// Iterates over the chunks in this sequence, from left to right
    ///
    /// Every call produces a fresh iterator: iterators are not restartable
    ///
    fn chunks<'a>(&'a self) -> Box<dyn 'a+Iterator<Item=&'a Self::Chunk>>;

    ///
    /// Materializes an ordered view of the chunks in this sequence
    ///
    fn seq(&self) -> Vec<&Self::Chunk>;
}
