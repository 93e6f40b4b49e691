use super::node::*;

use bytes::Bytes;

use std::ops::{Add, AddAssign};

// Conversions and operators: none of these do anything that can't be done with `wrap`, `append` and `join`

impl From<Bytes> for Rope {
    fn from(chunk: Bytes) -> Rope {
        Rope::wrap(chunk)
    }
}

impl From<Vec<u8>> for Rope {
    fn from(chunk: Vec<u8>) -> Rope {
        Rope::wrap(chunk)
    }
}

impl From<&'static [u8]> for Rope {
    fn from(chunk: &'static [u8]) -> Rope {
        Rope::wrap(chunk)
    }
}

impl From<&'static str> for Rope {
    fn from(chunk: &'static str) -> Rope {
        Rope::wrap(chunk)
    }
}

impl From<String> for Rope {
    fn from(chunk: String) -> Rope {
        Rope::wrap(chunk)
    }
}

impl FromIterator<Bytes> for Rope {
    fn from_iter<I: IntoIterator<Item=Bytes>>(chunks: I) -> Rope {
        chunks.into_iter()
            .fold(Rope::empty(), |rope, chunk| rope.append(&Rope::wrap(chunk)))
    }
}

impl FromIterator<Rope> for Rope {
    fn from_iter<I: IntoIterator<Item=Rope>>(ropes: I) -> Rope {
        ropes.into_iter()
            .fold(Rope::empty(), |rope, next| Rope::join(&rope, &next))
    }
}

impl Extend<Bytes> for Rope {
    fn extend<I: IntoIterator<Item=Bytes>>(&mut self, chunks: I) {
        for chunk in chunks {
            *self = self.append(&Rope::wrap(chunk));
        }
    }
}

impl<'a> Add<&'a Rope> for &'a Rope {
    type Output = Rope;

    fn add(self, other: &'a Rope) -> Rope {
        self.append(other)
    }
}

impl Add<Rope> for Rope {
    type Output = Rope;

    fn add(self, other: Rope) -> Rope {
        self.append(&other)
    }
}

impl<'a> AddAssign<&'a Rope> for Rope {
    fn add_assign(&mut self, other: &'a Rope) {
        *self = self.append(other);
    }
}
