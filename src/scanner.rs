//! Count records with more nucleotides than a threshold.

/* std use */
use std::path::{Path, PathBuf};

/* project use */
use crate::error;
use crate::fastq;
use crate::fastq::parser::Sequential;
use crate::stat::FileStat;

/// What to do when a file can't be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log a warning and continue with next file
    Skip,
    /// Stop and return the error
    Abort,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Skip
    }
}

struct LengthCounter {
    nucleotides: usize,
    over: u64,
    total: u64,
}

impl Sequential for LengthCounter {
    fn record(&mut self, record: fastq::Record) {
        self.total += 1;
        if record.len() > self.nucleotides {
            self.over += 1;
        }
    }
}

/// Scan fastq files and build a [FileStat] for each of them
#[derive(Debug, Clone)]
pub struct Scanner {
    nucleotides: usize,
    blocksize: u64,
}

impl Default for Scanner {
    fn default() -> Self {
        Scanner::new(crate::DEFAULT_NUCLEOTIDES)
    }
}

impl Scanner {
    pub fn new(nucleotides: usize) -> Self {
        Scanner::with_blocksize(nucleotides, crate::DEFAULT_BLOCKSIZE)
    }

    pub fn with_blocksize(nucleotides: usize, blocksize: u64) -> Self {
        Self {
            nucleotides,
            blocksize,
        }
    }

    pub fn nucleotides(&self) -> usize {
        self.nucleotides
    }

    /// Count records of file with strictly more than `nucleotides` nucleotides
    pub fn scan<P>(&self, path: P) -> error::Result<FileStat>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let mut counter = LengthCounter {
            nucleotides: self.nucleotides,
            over: 0,
            total: 0,
        };

        counter
            .with_blocksize(self.blocksize, path)
            .map_err(|source| error::Error::UnparsableFile {
                path: path.to_path_buf(),
                source: Box::new(source),
            })?;

        log::debug!(
            "{}: {} of {} records have more than {} nucleotides",
            path.display(),
            counter.over,
            counter.total,
            self.nucleotides
        );

        Ok(FileStat::new(path.to_path_buf(), counter.over, counter.total))
    }

    /// Scan each path in order, unparsable files are handle according to `policy`
    pub fn scan_all<I>(&self, paths: I, policy: FailurePolicy) -> error::Result<Vec<FileStat>>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut stats = Vec::new();

        for path in paths {
            match self.scan(&path) {
                Ok(stat) => stats.push(stat),
                Err(e) => match policy {
                    FailurePolicy::Skip => log::warn!("skip file, {}", e),
                    FailurePolicy::Abort => return Err(e),
                },
            }
        }

        log::info!("{} file(s) scanned", stats.len());

        Ok(stats)
    }
}
