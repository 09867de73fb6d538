/* mod declaration */
pub mod block;
pub mod parser;

pub use block::{Producer, Reader};

/* type declaration */
/// Record store a fastq record all field is public, line terminator isn't include
pub struct Record<'a> {
    pub comment: &'a [u8],
    pub sequence: &'a [u8],
    pub plus: &'a [u8],
    pub quality: &'a [u8],
}

impl<'a> Record<'a> {
    /// Number of nucleotides in record
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Return true if record sequence is empty
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
