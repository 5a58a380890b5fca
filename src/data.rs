use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Payload compiled into the binary, the stand-in for the deployment's
/// bundled data export. `--file` overrides it at runtime.
pub const BUNDLED_DATA: &str = include_str!("../data/source-data.json");

/// One element of the source array. The payload wraps everything in an
/// `employees` object, which may itself be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub employees: Option<Employee>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub workforce_utilisation: Option<WorkforceUtilisation>,
    pub status_aggregation: Option<StatusAggregation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceUtilisation {
    pub utilisation_rate_last_twelve_months: Option<String>,
    pub utilisation_rate_year_to_date: Option<String>,
    pub last_three_months_individually: Option<Vec<MonthlyUtilisation>>,
    pub monthly_cost_difference: Option<f64>,
    pub quarter_earnings: Option<String>,
}

/// Per-month entry of `lastThreeMonthsIndividually`. The label is a plain
/// string ("June", "July", ...), not a date.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUtilisation {
    #[serde(default)]
    pub month: String,
    pub utilisation_rate: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAggregation {
    /// The source encodes a missing salary as the literal string "null".
    pub monthly_salary: Option<String>,
}

#[derive(Debug)]
pub enum DataError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "could not read data file: {}", e),
            DataError::Parse(e) => write!(f, "could not parse data file: {}", e),
        }
    }
}

impl From<io::Error> for DataError {
    fn from(error: io::Error) -> Self {
        DataError::Io(error)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Parse(error)
    }
}

/// Load the record array from `path`, or the bundled payload when no path
/// is given.
pub fn load_records(path: Option<&Path>) -> Result<Vec<RawRecord>, DataError> {
    let records = match path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => serde_json::from_str(BUNDLED_DATA)?,
    };
    Ok(records)
}
