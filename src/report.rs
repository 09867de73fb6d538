//! Render scan results as a table.

/* std use */
use std::path::Path;

/* project use */
use crate::stat::FileStat;

/// Table with one line per file: file, records over threshold, total records and percent over threshold
pub struct Report<'a> {
    root: &'a Path,
    nucleotides: usize,
    stats: &'a [FileStat],
}

impl<'a> Report<'a> {
    /// File paths are show relative to `root` when possible
    pub fn new(root: &'a Path, nucleotides: usize, stats: &'a [FileStat]) -> Self {
        Self {
            root,
            nucleotides,
            stats,
        }
    }

    fn header(&self) -> [String; 4] {
        [
            "file".to_string(),
            format!("gt_{}", self.nucleotides),
            "total".to_string(),
            format!("percent_gt_{}", self.nucleotides),
        ]
    }

    fn row(&self, stat: &FileStat) -> [String; 4] {
        [
            relative_to(stat.path(), self.root).display().to_string(),
            stat.records_over_threshold().to_string(),
            stat.total_records().to_string(),
            format!("{:.2}", stat.percentage()),
        ]
    }
}

/// Remove `root` from begin of `path`, `.` components are ignored on both sides
fn relative_to(path: &Path, root: &Path) -> std::path::PathBuf {
    let path = without_cur_dir(path);
    let root = without_cur_dir(root);

    path.strip_prefix(&root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.clone())
}

fn without_cur_dir(path: &Path) -> std::path::PathBuf {
    path.components()
        .filter(|component| !matches!(component, std::path::Component::CurDir))
        .collect()
}

fn write_border(f: &mut std::fmt::Formatter<'_>, widths: &[usize; 4]) -> std::fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn write_line(
    f: &mut std::fmt::Formatter<'_>,
    widths: &[usize; 4],
    cells: &[String; 4],
) -> std::fmt::Result {
    // file column is left aligned, counts are right aligned
    write!(f, "| {:<width$} ", cells[0], width = widths[0])?;
    for (cell, width) in cells.iter().zip(widths).skip(1) {
        write!(f, "| {:>width$} ", cell, width = *width)?;
    }
    writeln!(f, "|")
}

impl<'a> std::fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = self.header();
        let rows = self
            .stats
            .iter()
            .map(|stat| self.row(stat))
            .collect::<Vec<[String; 4]>>();

        let mut widths = [0; 4];
        for cells in std::iter::once(&header).chain(rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_border(f, &widths)?;
        write_line(f, &widths, &header)?;
        write_border(f, &widths)?;

        if !rows.is_empty() {
            for cells in &rows {
                write_line(f, &widths, cells)?;
            }
            write_border(f, &widths)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let stats = vec![
            FileStat::new("/data/a.fastq".into(), 2, 4),
            FileStat::new("/data/sub/long_name.fastq".into(), 0, 0),
        ];

        assert_eq!(
            Report::new(Path::new("/data"), 30, &stats).to_string(),
            "+---------------------+-------+-------+---------------+
| file                | gt_30 | total | percent_gt_30 |
+---------------------+-------+-------+---------------+
| a.fastq             |     2 |     4 |         50.00 |
| sub/long_name.fastq |     0 |     0 |          0.00 |
+---------------------+-------+-------+---------------+
"
        );
    }

    #[test]
    fn empty() {
        assert_eq!(
            Report::new(Path::new("/data"), 30, &[]).to_string(),
            "+------+-------+-------+---------------+
| file | gt_30 | total | percent_gt_30 |
+------+-------+-------+---------------+
"
        );
    }

    #[test]
    fn root_with_cur_dir() {
        let stats = vec![
            FileStat::new("sub/x.fastq".into(), 1, 2),
            FileStat::new("./sub/deep/y.fastq".into(), 0, 1),
        ];

        let table = Report::new(Path::new("./sub/"), 30, &stats).to_string();

        assert!(table.contains("| x.fastq      |     1 |     2 |         50.00 |"));
        assert!(table.contains("| deep/y.fastq |     0 |     1 |          0.00 |"));
    }

    #[test]
    fn root_is_cur_dir() {
        let stats = vec![FileStat::new("a.fastq".into(), 1, 1)];

        let table = Report::new(Path::new("."), 30, &stats).to_string();

        assert!(table.contains("| a.fastq |     1 |     1 |        100.00 |"));
    }

    #[test]
    fn outside_root() {
        let stats = vec![FileStat::new("/other/b.fastq".into(), 1, 3)];

        let table = Report::new(Path::new("/data"), 100, &stats).to_string();

        assert!(table.contains("| /other/b.fastq |"));
        assert!(table.contains("| percent_gt_100 |"));
        assert!(table.contains("|          33.33 |"));
    }
}
