use crate::config::ExportConfig;
use crate::core::{Record, Storage};
use crate::utils::error::Result;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a [`Record`] as a two-column CSV document: a header row, then one
/// `key,value` row per field in insertion order.
pub struct CsvExporter<S: Storage> {
    storage: S,
    config: ExportConfig,
}

impl<S: Storage> CsvExporter<S> {
    pub fn new(storage: S, config: ExportConfig) -> Self {
        Self { storage, config }
    }

    /// Exports to the configured `output_path`.
    pub fn export_default(&self, record: &Record) -> Result<PathBuf> {
        self.export(record, &self.config.output_path)
    }

    /// Creates (or truncates) `path` and writes `record` to it. The file is
    /// flushed before this returns; on error it may be left partially written.
    pub fn export(&self, record: &Record, path: impl AsRef<Path>) -> Result<PathBuf> {
        let (writer, full_path) = self.storage.create(path.as_ref())?;

        tracing::debug!(
            "Exporting {} fields to {}",
            record.len(),
            full_path.display()
        );
        self.write_to(record, writer)?;

        tracing::info!("Wrote {} rows to {}", record.len() + 1, full_path.display());
        Ok(full_path)
    }

    /// Serializes `record` into any writer and flushes it.
    pub fn write_to<W: Write>(&self, record: &Record, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        wtr.write_record([&self.config.field_header, &self.config.value_header])?;
        for (key, value) in record.iter() {
            wtr.serialize((key, value))?;
        }

        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExportError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::rc::Rc;

    /// In-memory storage; buffers are shared so tests can inspect them after
    /// the exporter drops its writer.
    #[derive(Clone, Default)]
    struct MockStorage {
        files: Rc<RefCell<HashMap<PathBuf, Rc<RefCell<Vec<u8>>>>>>,
    }

    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(Path::new(path))
                .map(|buf| String::from_utf8(buf.borrow().clone()).unwrap())
        }
    }

    impl Storage for MockStorage {
        type Writer = SharedBuf;

        fn create(&self, path: &Path) -> Result<(SharedBuf, PathBuf)> {
            let buf = Rc::new(RefCell::new(Vec::new()));
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), Rc::clone(&buf));
            Ok((SharedBuf(buf), path.to_path_buf()))
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        type Writer = Vec<u8>;

        fn create(&self, _path: &Path) -> Result<(Vec<u8>, PathBuf)> {
            Err(ExportError::IoError(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only destination",
            )))
        }
    }

    fn render(record: &Record) -> String {
        let exporter = CsvExporter::new(MockStorage::default(), ExportConfig::default());
        let mut out = Vec::new();
        exporter.write_to(record, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_header_and_rows() {
        let record = Record::new()
            .with_field("Project Size (sq ft)", 10000)
            .with_field("Cost Savings per SF ($)", 1.67)
            .with_field("Building Type", "Commercial Office");

        assert_eq!(
            render(&record),
            "Field,Value\n\
             Project Size (sq ft),10000\n\
             Cost Savings per SF ($),1.67\n\
             Building Type,Commercial Office\n"
        );
    }

    #[test]
    fn test_empty_record_writes_header_only() {
        assert_eq!(render(&Record::new()), "Field,Value\n");
    }

    #[test]
    fn test_quotes_only_when_necessary() {
        let record = Record::new()
            .with_field("comma", "a,b")
            .with_field("quote", "say \"hi\"")
            .with_field("newline", "line1\nline2")
            .with_field("plain", "OSB + Wet Gypsum with MAXTERRA MgO Fire- And Water-Resistant");

        assert_eq!(
            render(&record),
            "Field,Value\n\
             comma,\"a,b\"\n\
             quote,\"say \"\"hi\"\"\"\n\
             newline,\"line1\nline2\"\n\
             plain,OSB + Wet Gypsum with MAXTERRA MgO Fire- And Water-Resistant\n"
        );
    }

    #[test]
    fn test_keys_are_quoted_too() {
        let record = Record::new().with_field("Cost, per SF", 2);
        assert_eq!(render(&record), "Field,Value\n\"Cost, per SF\",2\n");
    }

    #[test]
    fn test_custom_headers() {
        let config = ExportConfig {
            field_header: "Name".to_string(),
            value_header: "Amount".to_string(),
            ..ExportConfig::default()
        };
        let exporter = CsvExporter::new(MockStorage::default(), config);

        let mut out = Vec::new();
        exporter
            .write_to(&Record::new().with_field("x", 1), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name,Amount\nx,1\n");
    }

    #[test]
    fn test_export_goes_through_storage() {
        let storage = MockStorage::default();
        let exporter = CsvExporter::new(storage.clone(), ExportConfig::default());
        let record = Record::new().with_field("Email", "you@example.com");

        let path = exporter.export(&record, "report.csv").unwrap();

        assert_eq!(path, PathBuf::from("report.csv"));
        assert_eq!(
            storage.get_file("report.csv").unwrap(),
            "Field,Value\nEmail,you@example.com\n"
        );
    }

    #[test]
    fn test_export_default_uses_configured_path() {
        let storage = MockStorage::default();
        let config = ExportConfig {
            output_path: PathBuf::from("reports/savings.csv"),
            ..ExportConfig::default()
        };
        let exporter = CsvExporter::new(storage.clone(), config);

        let path = exporter
            .export_default(&Record::new().with_field("Building Type", "Other"))
            .unwrap();

        assert_eq!(path, PathBuf::from("reports/savings.csv"));
        assert_eq!(
            storage.get_file("reports/savings.csv").unwrap(),
            "Field,Value\nBuilding Type,Other\n"
        );
        assert!(storage.get_file("output.csv").is_none());
    }

    #[test]
    fn test_export_propagates_storage_failure() {
        let exporter = CsvExporter::new(FailingStorage, ExportConfig::default());
        let result = exporter.export(&Record::new(), "output.csv");

        match result {
            Err(ExportError::IoError(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("expected IoError, got {:?}", other),
        }
    }
}
