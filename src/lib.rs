//! Recursively find fastq files and report, per file, the percent of records with more nucleotides than a threshold.
//!
//! Pipeline is [locator::Locator] → [scanner::Scanner] → [report::Report], fastq files are read with the memory mapped parser of [fastq].

/* mod declaration */
pub mod block;
pub mod cli;
pub mod error;
pub mod fastq;
pub mod locator;
pub mod report;
pub mod scanner;
pub mod stat;

/// Default size of memory mapped window in bytes
pub const DEFAULT_BLOCKSIZE: u64 = 8192;

/// Default nucleotides threshold
pub const DEFAULT_NUCLEOTIDES: usize = 30;

/// Default pattern used to match files
pub const DEFAULT_PATTERN: &str = "**/*.fastq";
