pub mod local;

use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

/// Where the report goes and how its header reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub output_path: PathBuf,
    pub field_header: String,
    pub value_header: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            field_header: "Field".to_string(),
            value_header: "Value".to_string(),
        }
    }
}
