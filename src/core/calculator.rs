//! Savings estimates for replacing an existing floor assembly with MAXTERRA.
//!
//! Rates are held in mills (thousandths of a dollar) per square foot so
//! totals and rounding stay exact; they only become floats when rendered
//! into a [`Record`].

use crate::core::report::*;
use crate::core::Record;
use crate::utils::error::{ExportError, Result};

pub const PAYLOAD_PROJECT_TYPE: &str = "Project Type";
pub const PAYLOAD_SAVINGS: &str = "Savings Amount ($)";
pub const PAYLOAD_COMPETITOR: &str = "Competitor";

/// Per square foot cost of a system, in mills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rates {
    pub current_mills: u64,
    pub maxterra_mills: u64,
}

/// Competing structural subfloor panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Competitor {
    Structocrete,
    Exacor,
    Megaboard,
    DragonBoard,
    Nocom,
}

impl Competitor {
    pub fn name(self) -> &'static str {
        match self {
            Competitor::Structocrete => "STRUCTO-CRETE",
            Competitor::Exacor => "EXACOR",
            Competitor::Megaboard => "MEGABOARD",
            Competitor::DragonBoard => "DragonBoard",
            Competitor::Nocom => "NOCOM",
        }
    }

    pub fn rates(self) -> Rates {
        let (current_mills, maxterra_mills) = match self {
            Competitor::Structocrete => (7_460, 4_760),
            Competitor::Exacor => (4_320, 2_950),
            Competitor::Megaboard => (4_480, 3_200),
            Competitor::DragonBoard => (4_480, 3_200),
            Competitor::Nocom => (2_350, 1_760),
        };
        Rates {
            current_mills,
            maxterra_mills,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    /// OSB plus poured gypsum underlayment.
    WetGypsum,
    /// Whole subfloor system from a competing manufacturer.
    Subfloor(Competitor),
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::WetGypsum => "Wet Gypsum Underlayment",
            ProjectType::Subfloor(_) => "Entire Subfloor System",
        }
    }

    pub fn competitor(self) -> Option<Competitor> {
        match self {
            ProjectType::WetGypsum => None,
            ProjectType::Subfloor(competitor) => Some(competitor),
        }
    }

    pub fn replacement(self) -> String {
        match self {
            ProjectType::WetGypsum => {
                "OSB + Wet Gypsum with MAXTERRA MgO Fire- And Water-Resistant Underlayment"
                    .to_string()
            }
            ProjectType::Subfloor(competitor) => format!(
                "{} Subfloor with MAXTERRA MgO Non-Combustible Single Layer Structural Floor Panels",
                competitor.name()
            ),
        }
    }

    pub fn rates(self) -> Rates {
        match self {
            // OSB 0.70 + gypcrete 2.875 against OSB 0.70 + underlayment 1.21
            ProjectType::WetGypsum => Rates {
                current_mills: 700 + 2_875,
                maxterra_mills: 700 + 1_210,
            },
            ProjectType::Subfloor(competitor) => competitor.rates(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingType {
    MultiFamily,
    Hotel,
    CommercialOffice,
    Retail,
    SingleFamily,
    Other,
}

impl BuildingType {
    pub fn label(self) -> &'static str {
        match self {
            BuildingType::MultiFamily => "Multi-family Residential",
            BuildingType::Hotel => "Hotel/Hospitality",
            BuildingType::CommercialOffice => "Commercial Office",
            BuildingType::Retail => "Retail/Mixed-use",
            BuildingType::SingleFamily => "Single-family Residential",
            BuildingType::Other => "Other",
        }
    }

    /// Short key the report backend receives.
    pub fn key(self) -> &'static str {
        match self {
            BuildingType::MultiFamily => "multifamily",
            BuildingType::Hotel => "hotel",
            BuildingType::CommercialOffice => "commercial",
            BuildingType::Retail => "retail",
            BuildingType::SingleFamily => "singlefamily",
            BuildingType::Other => "other",
        }
    }
}

/// Contact details attached to a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Lead {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn placeholder() -> Self {
        Self::new("YourFirstName", "YourLastName", "you@example.com")
    }

    /// All three contact fields must be filled in before a report is sent.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            (FIELD_FIRST_NAME, &self.first_name),
            (FIELD_LAST_NAME, &self.last_name),
            (FIELD_EMAIL, &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ExportError::MissingLeadField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Whole-dollar totals for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavingsEstimate {
    pub project: ProjectType,
    pub size_sqft: u32,
    pub rates: Rates,
    pub current_cost: u64,
    pub maxterra_cost: u64,
    pub savings: u64,
    pub percent_savings: u64,
}

/// Divides rounding half up.
fn div_round(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

fn mills_to_dollars(mills: u64) -> f64 {
    div_round(mills, 10) as f64 / 100.0
}

pub fn estimate(project: ProjectType, size_sqft: u32) -> SavingsEstimate {
    let rates = project.rates();
    let size = u64::from(size_sqft);
    let diff_mills = rates.current_mills.saturating_sub(rates.maxterra_mills);

    SavingsEstimate {
        project,
        size_sqft,
        rates,
        current_cost: div_round(rates.current_mills * size, 1_000),
        maxterra_cost: div_round(rates.maxterra_mills * size, 1_000),
        savings: div_round(diff_mills * size, 1_000),
        percent_savings: div_round(diff_mills * 100, rates.current_mills),
    }
}

impl SavingsEstimate {
    /// Lays the estimate out as a savings report; per square foot figures
    /// are rounded to cents.
    pub fn to_record(&self, lead: &Lead, building_type: BuildingType) -> Record {
        let diff_mills = self
            .rates
            .current_mills
            .saturating_sub(self.rates.maxterra_mills);

        Record::new()
            .with_field(FIELD_PROJECT_TYPE, self.project.label())
            .with_field(FIELD_REPLACE_SYSTEM, self.project.replacement())
            .with_field(FIELD_PROJECT_SIZE, self.size_sqft)
            .with_field(FIELD_BUILDING_TYPE, building_type.label())
            .with_field(FIELD_TOTAL_SAVINGS, to_i64(self.savings))
            .with_field(FIELD_SAVINGS_PER_SF, mills_to_dollars(diff_mills))
            .with_field(FIELD_CURRENT_COST, to_i64(self.current_cost))
            .with_field(
                FIELD_CURRENT_COST_PER_SF,
                mills_to_dollars(self.rates.current_mills),
            )
            .with_field(FIELD_MAXTERRA_COST, to_i64(self.maxterra_cost))
            .with_field(
                FIELD_MAXTERRA_COST_PER_SF,
                mills_to_dollars(self.rates.maxterra_mills),
            )
            .with_field(FIELD_FIRST_NAME, lead.first_name.as_str())
            .with_field(FIELD_LAST_NAME, lead.last_name.as_str())
            .with_field(FIELD_EMAIL, lead.email.as_str())
    }

    /// One-line headline, e.g. `That's 47% less than gypcrete!`.
    pub fn summary(&self) -> String {
        let baseline = self
            .project
            .competitor()
            .map(Competitor::name)
            .unwrap_or("gypcrete");
        format!("That's {}% less than {}!", self.percent_savings, baseline)
    }

    /// Body of a report email request. Requires a complete lead.
    pub fn to_email_payload(&self, lead: &Lead, building_type: BuildingType) -> Result<Record> {
        lead.validate()?;

        let competitor = self
            .project
            .competitor()
            .map(Competitor::name)
            .unwrap_or("N/A");

        Ok(Record::new()
            .with_field(FIELD_FIRST_NAME, lead.first_name.as_str())
            .with_field(FIELD_LAST_NAME, lead.last_name.as_str())
            .with_field(FIELD_EMAIL, lead.email.as_str())
            .with_field(FIELD_BUILDING_TYPE, building_type.key())
            .with_field(PAYLOAD_PROJECT_TYPE, self.project.label())
            .with_field(PAYLOAD_SAVINGS, to_i64(self.savings))
            .with_field(FIELD_CURRENT_COST, to_i64(self.current_cost))
            .with_field(FIELD_MAXTERRA_COST, to_i64(self.maxterra_cost))
            .with_field(FIELD_PROJECT_SIZE, self.size_sqft)
            .with_field(PAYLOAD_COMPETITOR, competitor))
    }
}

// u32 square feet times a few dollars never gets near i64::MAX.
fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
