use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PicnicError, Result};

/// Measurement convention requested from the weather provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitGroup {
    Us,
    Uk,
    #[default]
    Metric,
    Base,
}

impl UnitGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitGroup::Us => "us",
            UnitGroup::Uk => "uk",
            UnitGroup::Metric => "metric",
            UnitGroup::Base => "base",
        }
    }

    pub const fn all() -> &'static [UnitGroup] {
        &[UnitGroup::Us, UnitGroup::Uk, UnitGroup::Metric, UnitGroup::Base]
    }
}

impl std::fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitGroup {
    type Error = PicnicError;

    fn try_from(value: &str) -> Result<Self> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "us" => Ok(UnitGroup::Us),
            "uk" => Ok(UnitGroup::Uk),
            "metric" => Ok(UnitGroup::Metric),
            "base" => Ok(UnitGroup::Base),
            _ => Err(PicnicError::InvalidArgument(format!(
                "Unknown unit group '{value}'. Supported unit groups: us, uk, metric, base."
            ))),
        }
    }
}

/// Weather record for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Date identifier, `YYYY-MM-DD`.
    #[serde(rename = "datetime")]
    pub date: String,

    /// Mean temperature in the requested unit group.
    #[serde(rename = "temp")]
    pub mean_temperature: f64,

    #[serde(rename = "tempmax", default)]
    pub max_temperature: Option<f64>,

    #[serde(rename = "tempmin", default)]
    pub min_temperature: Option<f64>,

    #[serde(default)]
    pub conditions: Option<String>,
}

/// Multi-day forecast for one city and one unit group.
///
/// Days keep the provider's (chronological) order, but lookups go by date
/// identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(rename = "resolvedAddress", default)]
    pub resolved_address: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub timezone: Option<String>,

    pub days: Vec<ForecastDay>,
}

impl Forecast {
    /// Mean temperature recorded for the calendar day of `date`.
    ///
    /// The date identifier is built from `date`'s own calendar fields, so a
    /// local date-time is never shifted to UTC before the lookup.
    pub fn temperature_on(&self, date: &impl Datelike) -> Result<f64> {
        let formatted = date_identifier(date);

        self.days
            .iter()
            .find(|day| day.date == formatted)
            .map(|day| day.mean_temperature)
            .ok_or_else(|| {
                PicnicError::NotFound(format!(
                    "Temperature extraction failed. Could not find weather for {formatted}"
                ))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// First date identifier that appears more than once, if any.
    pub fn duplicate_date(&self) -> Option<&str> {
        self.days.iter().enumerate().find_map(|(i, day)| {
            self.days[..i]
                .iter()
                .any(|earlier| earlier.date == day.date)
                .then_some(day.date.as_str())
        })
    }
}

/// Result of planning one weekend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekendPlan {
    pub saturday: NaiveDate,
    pub sunday: NaiveDate,
    pub saturday_temperature: f64,
    pub sunday_temperature: f64,
    pub recommendation: String,
}

fn date_identifier(date: &impl Datelike) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
