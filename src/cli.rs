//! Command line interface.

/* std use */
use std::io::Write;

/* project use */
use crate::error;
use crate::locator::Locator;
use crate::report::Report;
use crate::scanner::{FailurePolicy, Scanner};
use crate::stat::FileStat;

#[derive(clap::Parser, Debug)]
#[clap(
    name = "fqstat",
    version,
    about = "Recursively find fastq files and report the percent of records with more nucleotides than a provided value per file",
    after_help = "Example: fqstat . - recursively search the current directory"
)]
pub struct Command {
    #[clap(help = "Folder in which the search will begin")]
    pub root_dir: std::path::PathBuf,

    #[clap(
        short = 'p',
        long = "pattern",
        help = "A pattern used to match files, relative to root_dir",
        default_value_t = String::from(crate::DEFAULT_PATTERN)
    )]
    pub pattern: String,

    #[clap(
        short = 'n',
        long = "nucleotides",
        value_name = "INT",
        help = "Records with more nucleotides than this value are counted",
        default_value_t = crate::DEFAULT_NUCLEOTIDES
    )]
    pub nucleotides: usize,

    #[clap(short = 'q', long = "quiet", help = "Don't print report")]
    pub quiet: bool,

    #[clap(
        short = 's',
        long = "strict",
        help = "Stop at first file that can't be parsed, instead of skip it"
    )]
    pub strict: bool,

    #[clap(
        short = 'b',
        long = "blocksize",
        help = "Control default blocksize",
        default_value_t = crate::DEFAULT_BLOCKSIZE
    )]
    pub blocksize: u64,

    #[clap(short = 'v', long = "verbose", help = "Provide additional information")]
    pub verbose: bool,
}

impl Command {
    pub fn policy(&self) -> FailurePolicy {
        if self.strict {
            FailurePolicy::Abort
        } else {
            FailurePolicy::Skip
        }
    }

    /// Default log filter, `RUST_LOG` take precedence
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Locate files, scan them and write report in `out` unless quiet is set
    pub fn run<W>(&self, out: &mut W) -> error::Result<Vec<FileStat>>
    where
        W: Write,
    {
        let locator = Locator::new(&self.root_dir, &self.pattern)?;
        let scanner = Scanner::with_blocksize(self.nucleotides, self.blocksize);

        let stats = scanner.scan_all(locator, self.policy())?;

        if !self.quiet {
            write!(
                out,
                "{}",
                Report::new(&self.root_dir, scanner.nucleotides(), &stats)
            )
            .map_err(|source| error::Error::WriteReport { source })?;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    fn fastq_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();

        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(
            dir.path().join("a.fastq"),
            crate::tests::fastq_content(&[10, 40, 35, 5]),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("sub").join("b.fastq"),
            crate::tests::fastq_content(&[100]),
        )
        .unwrap();
        std::fs::write(dir.path().join("c.fasta"), ">r1\nACGT\n").unwrap();

        dir
    }

    #[test]
    fn default_value() {
        let params = Command::parse_from(["fqstat", "data"]);

        assert_eq!(params.root_dir, std::path::PathBuf::from("data"));
        assert_eq!(params.pattern, crate::DEFAULT_PATTERN);
        assert_eq!(params.nucleotides, crate::DEFAULT_NUCLEOTIDES);
        assert_eq!(params.blocksize, crate::DEFAULT_BLOCKSIZE);
        assert!(!params.quiet);
        assert_eq!(params.policy(), FailurePolicy::Skip);
        assert_eq!(params.log_level(), "warn");
    }

    #[test]
    fn set_value() {
        let params = Command::try_parse_from([
            "fqstat",
            "data",
            "--pattern",
            "*.fq",
            "--nucleotides",
            "50",
            "--quiet",
            "--strict",
            "-v",
            "-b",
            "16",
        ])
        .unwrap();

        assert_eq!(params.blocksize, 16);
        assert_eq!(params.pattern, "*.fq");
        assert_eq!(params.nucleotides, 50);
        assert!(params.quiet);
        assert_eq!(params.policy(), FailurePolicy::Abort);
        assert_eq!(params.log_level(), "debug");
    }

    #[test]
    fn root_dir_required() {
        assert!(Command::try_parse_from(["fqstat"]).is_err());
    }

    #[test]
    fn run() {
        let dir = fastq_tree();
        let params = Command::parse_from([std::ffi::OsStr::new("fqstat"), dir.path().as_os_str()]);

        let mut out = Vec::new();
        let mut stats = params.run(&mut out).unwrap();
        stats.sort_by(|a, b| a.path().cmp(b.path()));

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].records_over_threshold(), 2);
        assert_eq!(stats[0].total_records(), 4);
        assert_eq!(stats[1].records_over_threshold(), 1);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("| a.fastq     |     2 |     4 |         50.00 |"));
        assert!(out.contains("| sub/b.fastq |     1 |     1 |        100.00 |"));
        assert!(!out.contains("c.fasta"));
    }

    #[test]
    fn quiet() {
        let dir = fastq_tree();
        let params = Command::parse_from([
            std::ffi::OsStr::new("fqstat"),
            dir.path().as_os_str(),
            std::ffi::OsStr::new("--quiet"),
        ]);

        let mut out = Vec::new();
        let stats = params.run(&mut out).unwrap();

        assert_eq!(stats.len(), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let params = Command::parse_from([std::ffi::OsStr::new("fqstat"), missing.as_os_str()]);

        let mut out = Vec::new();

        assert!(matches!(
            params.run(&mut out),
            Err(error::Error::InvalidRootDirectory { .. })
        ));
        assert!(out.is_empty());
    }
}
