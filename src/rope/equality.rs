use super::node::*;

///
/// True if the chunks of a rope contain exactly the bytes in a slice
///
pub (super) fn chunks_eq_slice(rope: &Rope, bytes: &[u8]) -> bool {
    if rope.size() != bytes.len() {
        return false;
    }

    // The chunk lengths add up to the slice length, so every split is in range
    let mut remaining = bytes;
    rope.chunks()
        .all(|chunk| {
            let (expected, rest)    = remaining.split_at(chunk.len());
            remaining               = rest;

            expected == &chunk[..]
        })
}

impl PartialEq for Rope {
    fn eq(&self, other: &Rope) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        if self.size() != other.size() {
            return false;
        }

        // Different hashes mean different contents (we never force a hash calculation here)
        if let (Some(our_hash), Some(their_hash)) = (self.cached_hash(), other.cached_hash()) {
            if our_hash != their_hash {
                return false;
            }
        }

        match self {
            Rope::Leaf(leaf)        => leaf.content_eq(other),
            Rope::Concat(concat)    => concat.content_eq(other)
        }
    }
}

impl Eq for Rope { }

impl PartialEq<[u8]> for Rope {
    fn eq(&self, other: &[u8]) -> bool {
        chunks_eq_slice(self, other)
    }
}

impl<'a> PartialEq<&'a [u8]> for Rope {
    fn eq(&self, other: &&'a [u8]) -> bool {
        chunks_eq_slice(self, other)
    }
}

impl PartialEq<Vec<u8>> for Rope {
    fn eq(&self, other: &Vec<u8>) -> bool {
        chunks_eq_slice(self, other)
    }
}

impl<'a> PartialEq<&'a str> for Rope {
    fn eq(&self, other: &&'a str) -> bool {
        chunks_eq_slice(self, other.as_bytes())
    }
}
