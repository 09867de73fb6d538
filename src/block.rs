//! Struct that hold part of file (called block) mapped in memory.

/// Block reperesent a section of file memory mapped, only the first `end` bytes contains complete records
#[derive(Debug)]
pub struct Block {
    mem: memmap2::Mmap,
    end: usize,
}

impl Block {
    /// Create a new Block
    pub fn new(end: usize, mem: memmap2::Mmap) -> Self {
        Self { mem, end }
    }

    /// Acces to data owned by block
    pub fn data(&self) -> &[u8] {
        &self.mem[..self.end]
    }

    /// Get length of block
    pub fn len(&self) -> usize {
        self.end
    }

    /// Return true if the block is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
