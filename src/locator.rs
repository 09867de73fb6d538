//! Find files that match a glob pattern under a root directory.

/* std use */
use std::path::{Path, PathBuf};

/* project use */
use crate::error;

/// Lazy iterator over files match by pattern, only regular files are produce.
///
/// Walk isn't restartable, build a new [Locator] to read filesystem again.
pub struct Locator {
    paths: glob::Paths,
}

impl Locator {
    /// Create a Locator, `pattern` is relative to `root`, `**` match zero or more directories
    pub fn new<P>(root: P, pattern: &str) -> error::Result<Self>
    where
        P: AsRef<Path>,
    {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(error::Error::InvalidRootDirectory {
                path: root.to_path_buf(),
            });
        }

        if Path::new(pattern).is_absolute() {
            return Err(error::Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "pattern must be relative to root directory".to_string(),
            });
        }

        let full_pattern = Path::new(&glob::Pattern::escape(&root.to_string_lossy())).join(pattern);

        log::debug!("search files match {}", full_pattern.display());

        let paths = glob::glob_with(&full_pattern.to_string_lossy(), glob::MatchOptions::new())
            .map_err(|e| error::Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.msg.to_string(),
            })?;

        Ok(Self { paths })
    }
}

impl Iterator for Locator {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.paths.by_ref() {
            match entry {
                Ok(path) if path.is_file() => return Some(path),
                Ok(path) => log::debug!("{} isn't a file, skip it", path.display()),
                Err(e) => log::warn!("can't read {}: {}", e.path().display(), e.error()),
            }
        }

        None
    }
}
