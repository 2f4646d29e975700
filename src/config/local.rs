use crate::core::Storage;
use crate::utils::error::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at `base_path`. The default root is the
/// current working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    fn create(&self, path: &Path) -> Result<(Self::Writer, PathBuf)> {
        let full_path = self.base_path.join(path);

        // Parent directories are not created; a missing one is an I/O failure.
        let file = File::create(&full_path)?;
        tracing::debug!("Opened {} for writing", full_path.display());

        Ok((BufWriter::new(file), full_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExportError;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_create_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("out.csv"), "old content that is long").unwrap();

        let storage = LocalStorage::new(temp_dir.path());
        let (mut writer, full_path) = storage.create(Path::new("out.csv")).unwrap();
        writer.write_all(b"new").unwrap();
        drop(writer);

        assert_eq!(full_path, temp_dir.path().join("out.csv"));
        assert_eq!(std::fs::read_to_string(full_path).unwrap(), "new");
    }

    #[test]
    fn test_create_fails_without_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        let result = storage.create(Path::new("missing/out.csv"));
        assert!(matches!(result, Err(ExportError::IoError(_))));
    }

    #[test]
    fn test_default_storage_uses_relative_path() {
        let storage = LocalStorage::default();
        assert_eq!(storage.base_path.join("output.csv"), PathBuf::from("output.csv"));
    }
}
