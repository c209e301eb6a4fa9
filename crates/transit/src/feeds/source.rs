//! Pluggable feed transport.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Result;

/// Supplies the raw body of a transit data feed.
///
/// Implement this to plug in a transport: the embedding application
/// typically brings an HTTP client; tests and bundled data use
/// [`FileSource`].
pub trait FeedSource {
    fn fetch(&self) -> Result<String>;
}

/// Feed source backed by a local file (bundled or previously cached data).
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl FeedSource for FileSource {
    fn fetch(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransitError;

    #[test]
    fn missing_file_reports_feed_io() {
        let source = FileSource::new("/nonexistent/stops.json");
        assert!(matches!(source.fetch(), Err(TransitError::FeedIo(_))));
    }
}
