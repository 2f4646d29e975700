use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for exported bytes.
pub trait Storage {
    type Writer: Write;

    /// Opens `path` for writing, truncating anything already there.
    /// Returns the writer together with the resolved location.
    fn create(&self, path: &Path) -> Result<(Self::Writer, PathBuf)>;
}
