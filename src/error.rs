//! Error type shared by the parser and the reporting pipeline.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fqstat failled to read file metadata {source}")]
    MetaDataFile { source: std::io::Error },

    #[error("fqstat can't open file {source}")]
    OpenFile { source: std::io::Error },

    #[error("fqstat can't map file on memory {source}")]
    MapFile { source: std::io::Error },

    #[error("Input file seems not be a fastq file")]
    NotAFastqFile,

    #[error("fqstat found a partial record")]
    PartialRecord,

    #[error("sequence length ({sequence}) and quality length ({quality}) differ")]
    SequenceQualityLength { sequence: usize, quality: usize },

    #[error("root directory {} does not exist or is not a directory, check the path given as root_dir", path.display())]
    InvalidRootDirectory { path: std::path::PathBuf },

    #[error("pattern '{pattern}' is invalid: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("{} can't be parsed as fastq: {source}", path.display())]
    UnparsableFile {
        path: std::path::PathBuf,
        source: Box<Error>,
    },

    #[error("fqstat can't write report {source}")]
    WriteReport { source: std::io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
