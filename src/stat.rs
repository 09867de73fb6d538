//! Per file result of a scan.

/// Count of records over threshold and total count of records of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStat {
    path: std::path::PathBuf,
    records_over_threshold: u64,
    total_records: u64,
}

impl FileStat {
    pub(crate) fn new(
        path: std::path::PathBuf,
        records_over_threshold: u64,
        total_records: u64,
    ) -> Self {
        debug_assert!(records_over_threshold <= total_records);

        Self {
            path,
            records_over_threshold,
            total_records,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn records_over_threshold(&self) -> u64 {
        self.records_over_threshold
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Percent of records over threshold, 0 for a file without record
    pub fn percentage(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            self.records_over_threshold as f64 / self.total_records as f64 * 100.0
        }
    }
}
