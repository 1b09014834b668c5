//! Caller-owned scratch arena.

/// Working buffers for the forward and inverse transforms.
///
/// A `Scratch` is exclusive to one call at a time: every operation takes
/// it by `&mut`, so two overlapping calls can never share one. Keep one per
/// thread (or per worker) and pass it to each block to avoid reallocating.
/// Buffers are resized on every call and never hold references into
/// caller memory, so reusing a scratch across unrelated blocks is safe.
#[derive(Debug, Default, Clone)]
pub struct Scratch {
    /// Primitive root written twice, fed to the suffix array provider.
    pub(crate) doubled: Vec<u8>,
    /// Suffix array of `doubled`.
    pub(crate) sa: Vec<usize>,
    /// Border table used to find the primitive root.
    pub(crate) border: Vec<usize>,
    /// Rotation offsets for the reference sort.
    pub(crate) rotations: Vec<usize>,
    /// Four-byte prefix keys for the reference sort.
    pub(crate) keys: Vec<u32>,
    /// Next-pointer array for the inverse transform.
    pub(crate) next: Vec<usize>,
}

impl Scratch {
    /// Create an empty arena. Nothing is allocated until first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena sized for blocks of up to `block_size` bytes.
    pub fn with_block_size(block_size: usize) -> Self {
        Self {
            doubled: Vec::with_capacity(2 * block_size),
            sa: Vec::with_capacity(2 * block_size),
            border: Vec::with_capacity(block_size),
            rotations: Vec::new(),
            keys: Vec::new(),
            next: Vec::with_capacity(block_size),
        }
    }

    /// Release all held memory.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Bytes currently reserved by the arena.
    pub fn capacity_bytes(&self) -> usize {
        use std::mem::size_of;
        self.doubled.capacity()
            + (self.sa.capacity()
                + self.border.capacity()
                + self.rotations.capacity()
                + self.next.capacity())
                * size_of::<usize>()
            + self.keys.capacity() * size_of::<u32>()
    }
}
