//!
//! # Rope capability traits
//!
//! A rope is a sequence of chunks: these traits describe how that sequence can be sized, iterated
//! and folded without reference to the tree that stores it.
//!

mod chunk_sequence_trait;
mod reducible_trait;
mod reduction;
mod rope_error;

pub use self::chunk_sequence_trait::*;
pub use self::reducible_trait::*;
pub use self::reduction::*;
pub use self::rope_error::*;
