//! Scene object identifiers

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a scene object, with a generation counter for safe reuse
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId {
    /// Lower 32 bits: index, Upper 32 bits: generation
    bits: u64,
}

impl ObjectId {
    #[inline]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            bits: (generation as u64) << 32 | index as u64,
        }
    }

    #[inline]
    pub const fn index(&self) -> u32 {
        self.bits as u32
    }

    #[inline]
    pub const fn generation(&self) -> u32 {
        (self.bits >> 32) as u32
    }

    #[inline]
    pub const fn to_bits(&self) -> u64 {
        self.bits
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({}v{})", self.index(), self.generation())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // generation 0 is by far the common case, keep log lines short
        if self.generation() == 0 {
            write!(f, "#{}", self.index())
        } else {
            write!(f, "#{}v{}", self.index(), self.generation())
        }
    }
}

/// Hands out unique object ids
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Generate the next unique id
    pub fn next(&self) -> ObjectId {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        ObjectId::new(index as u32, 0)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
