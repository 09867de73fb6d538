//! Extract part of file (called block) and read it as fastq file.

/* crate use */
use bstr::ByteSlice;

/* project use */
use crate::block::Block;
use crate::error;

/// Map a file block by block, each block end on a record boundary
pub struct Producer {
    offset: u64,
    blocksize: u64,
    file: std::fs::File,
    file_length: u64,
}

impl Producer {
    pub fn new<P>(path: P) -> error::Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        Producer::with_blocksize(crate::DEFAULT_BLOCKSIZE, path)
    }

    pub fn with_blocksize<P>(blocksize: u64, path: P) -> error::Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        let file_length = path
            .as_ref()
            .metadata()
            .map_err(|source| error::Error::MetaDataFile { source })?
            .len();

        Ok(Producer {
            offset: 0,
            blocksize: file_length.min(blocksize).max(1),
            file_length,
            file: std::fs::File::open(path).map_err(|source| error::Error::OpenFile { source })?,
        })
    }

    /// Get the next [Block], a block contains only complete records.
    ///
    /// If no record boundary is found in the current window, window size is doubled until a boundary is found or end of file is reach.
    pub fn next_block(&mut self) -> error::Result<Option<Block>> {
        if self.offset == self.file_length {
            return Ok(None);
        }

        let mut window = self.blocksize;
        loop {
            if self.offset + window >= self.file_length {
                let block = self.map_window(self.file_length - self.offset)?;

                self.offset = self.file_length;

                return Ok(Some(Block::new(block.len(), block)));
            }

            let tmp = self.map_window(window)?;

            match Producer::correct_block_size(&tmp) {
                Some(blocksize) => {
                    self.offset += blocksize;

                    return Ok(Some(Block::new(blocksize as usize, tmp)));
                }
                None => {
                    log::debug!(
                        "no record boundary in {} bytes at offset {}, double window size",
                        window,
                        self.offset
                    );
                    window *= 2;
                }
            }
        }
    }

    fn map_window(&self, length: u64) -> error::Result<memmap2::Mmap> {
        unsafe {
            memmap2::MmapOptions::new()
                .offset(self.offset)
                .len(length as usize)
                .map(&self.file)
        }
        .map_err(|source| error::Error::MapFile { source })
    }

    /// Search the begin of the partial record at the end of block
    fn correct_block_size(block: &[u8]) -> Option<u64> {
        let mut end = block.len();
        let mut seen_plus = false;

        for _ in 0..8 {
            end = block[..end].rfind_byte(b'\n')?;

            if end + 1 < block.len() {
                seen_plus = seen_plus || block[end + 1] == b'+';

                if seen_plus && block[end + 1] == b'@' {
                    return Some((end + 1) as u64);
                }
            }
        }

        None
    }
}

impl Iterator for Producer {
    type Item = error::Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_block().transpose()
    }
}

/// Read records of a [Block]
pub struct Reader {
    offset: usize,
    block: Block,
}

impl Reader {
    pub fn new(block: Block) -> Self {
        Reader { offset: 0, block }
    }

    fn next_line(&mut self) -> Option<std::ops::Range<usize>> {
        let data = self.block.data();
        if self.offset >= data.len() {
            return None;
        }

        let begin = self.offset;
        let mut end = memchr::memchr(b'\n', &data[begin..])
            .map(|pos| begin + pos)
            .unwrap_or(data.len());

        self.offset = (end + 1).min(data.len());

        if end > begin && data[end - 1] == b'\r' {
            end -= 1;
        }

        Some(begin..end)
    }

    pub fn next_record(&mut self) -> error::Result<Option<super::Record<'_>>> {
        // blank lines before a header are ignored
        let rest = &self.block.data()[self.offset..];
        self.offset += rest.len() - rest.trim_start().len();
        if self.offset == self.block.len() {
            return Ok(None);
        }

        let comment = self.next_line().ok_or(error::Error::PartialRecord)?;
        if self.block.data().get(comment.start) != Some(&b'@') {
            return Err(error::Error::NotAFastqFile);
        }

        let sequence = self.next_line().ok_or(error::Error::PartialRecord)?;

        let plus = self.next_line().ok_or(error::Error::PartialRecord)?;
        if self.block.data().get(plus.start) != Some(&b'+') {
            return Err(error::Error::NotAFastqFile);
        }

        let quality = self.next_line().ok_or(error::Error::PartialRecord)?;
        if sequence.len() != quality.len() {
            return Err(error::Error::SequenceQualityLength {
                sequence: sequence.len(),
                quality: quality.len(),
            });
        }

        let data = self.block.data();
        Ok(Some(super::Record {
            comment: &data[comment],
            sequence: &data[sequence],
            plus: &data[plus],
            quality: &data[quality],
        }))
    }
}
