pub mod calculator;
pub mod exporter;
pub mod mailer;
pub mod report;

pub use crate::domain::model::{FieldValue, Record};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
