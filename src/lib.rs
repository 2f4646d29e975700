pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, ExportConfig};
pub use crate::core::{
    calculator::{estimate, BuildingType, Competitor, Lead, ProjectType, SavingsEstimate},
    exporter::CsvExporter,
    mailer::ReportMailer,
    report::savings_report,
};
pub use domain::model::{FieldValue, Record};
pub use utils::error::{ExportError, Result};
