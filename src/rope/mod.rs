mod node;
mod leaf;
mod concat;
mod content_hash;
mod equality;
mod chunks;
mod rope_extensions;
#[cfg(test)] mod tests;

pub use self::node::*;
pub use self::leaf::*;
pub use self::concat::*;
pub use self::chunks::*;
pub use self::content_hash::{HASH_MULTIPLIER, HASH_SEED, hash_bytes};
