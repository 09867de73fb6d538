/* project use */
use crate::block::Block;
use crate::error;
use crate::fastq;

/// Trait allow sequential parsing of fastq
///
/// Reading is perform by block. Parser map a block of file in memory, this block is resize to remove incomplete record.
/// For each block record is extract and `record` function is call on it.
pub trait Sequential {
    /// Parse file indicate by path with default blocksize [crate::DEFAULT_BLOCKSIZE]
    fn parse<P>(&mut self, path: P) -> error::Result<()>
    where
        P: AsRef<std::path::Path>,
    {
        self.with_blocksize(crate::DEFAULT_BLOCKSIZE, path)
    }

    /// Parse file indicate by path with selected blocksize
    fn with_blocksize<P>(&mut self, blocksize: u64, path: P) -> error::Result<()>
    where
        P: AsRef<std::path::Path>,
    {
        for block in fastq::Producer::with_blocksize(blocksize, path)? {
            self.block(block?)?
        }

        Ok(())
    }

    /// Method call to parse a block
    fn block(&mut self, block: Block) -> error::Result<()> {
        let mut reader = fastq::Reader::new(block);

        while let Some(record) = reader.next_record()? {
            self.record(record)
        }

        Ok(())
    }

    /// Method call to parse a record
    fn record(&mut self, record: fastq::Record);
}
