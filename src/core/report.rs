use crate::core::Record;

pub const FIELD_PROJECT_TYPE: &str = "What are you looking to replace?";
pub const FIELD_REPLACE_SYSTEM: &str = "Replace System";
pub const FIELD_PROJECT_SIZE: &str = "Project Size (sq ft)";
pub const FIELD_BUILDING_TYPE: &str = "Building Type";
pub const FIELD_TOTAL_SAVINGS: &str = "Total Project Savings ($)";
pub const FIELD_SAVINGS_PER_SF: &str = "Cost Savings per SF ($)";
pub const FIELD_CURRENT_COST: &str = "Current System Cost ($)";
pub const FIELD_CURRENT_COST_PER_SF: &str = "Current System Cost per SF ($/sq ft)";
pub const FIELD_MAXTERRA_COST: &str = "MAXTERRA System Cost ($)";
pub const FIELD_MAXTERRA_COST_PER_SF: &str = "MAXTERRA Cost per SF ($/sq ft)";
pub const FIELD_FIRST_NAME: &str = "First Name";
pub const FIELD_LAST_NAME: &str = "Last Name";
pub const FIELD_EMAIL: &str = "Email";

/// Column order of every savings report.
pub const REPORT_FIELDS: [&str; 13] = [
    FIELD_PROJECT_TYPE,
    FIELD_REPLACE_SYSTEM,
    FIELD_PROJECT_SIZE,
    FIELD_BUILDING_TYPE,
    FIELD_TOTAL_SAVINGS,
    FIELD_SAVINGS_PER_SF,
    FIELD_CURRENT_COST,
    FIELD_CURRENT_COST_PER_SF,
    FIELD_MAXTERRA_COST,
    FIELD_MAXTERRA_COST_PER_SF,
    FIELD_FIRST_NAME,
    FIELD_LAST_NAME,
    FIELD_EMAIL,
];

/// The wet gypsum replacement report for a 10,000 sq ft commercial office,
/// with placeholder contact details.
pub fn savings_report() -> Record {
    Record::new()
        .with_field(FIELD_PROJECT_TYPE, "Wet Gypsum Underlayment")
        .with_field(
            FIELD_REPLACE_SYSTEM,
            "OSB + Wet Gypsum with MAXTERRA MgO Fire- And Water-Resistant Underlayment",
        )
        .with_field(FIELD_PROJECT_SIZE, 10000)
        .with_field(FIELD_BUILDING_TYPE, "Commercial Office")
        .with_field(FIELD_TOTAL_SAVINGS, 16650)
        .with_field(FIELD_SAVINGS_PER_SF, 1.67)
        .with_field(FIELD_CURRENT_COST, 35750)
        .with_field(FIELD_CURRENT_COST_PER_SF, 3.58)
        .with_field(FIELD_MAXTERRA_COST, 19100)
        .with_field(FIELD_MAXTERRA_COST_PER_SF, 1.91)
        .with_field(FIELD_FIRST_NAME, "YourFirstName")
        .with_field(FIELD_LAST_NAME, "YourLastName")
        .with_field(FIELD_EMAIL, "you@example.com")
}
