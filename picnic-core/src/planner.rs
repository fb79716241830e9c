//! The weekend planning flow: validate, resolve dates, fetch, extract, classify.

use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

use crate::{
    advice::classify,
    calendar::{WeekdayIndex, next_occurrence},
    error::{PicnicError, Result},
    model::{UnitGroup, WeekendPlan},
    provider::ForecastProvider,
    validation::validate,
};

/// Plan the weekend following `now` for `city`.
///
/// Performs a single forecast request; any failure aborts the whole plan.
pub async fn plan_weekend<Tz: TimeZone>(
    provider: &dyn ForecastProvider,
    city: &str,
    unit_group: UnitGroup,
    now: &DateTime<Tz>,
) -> Result<WeekendPlan> {
    validate("city", city)?;

    let saturday = next_occurrence(now, WeekdayIndex::SATURDAY)?;
    let sunday = next_occurrence(now, WeekdayIndex::SUNDAY)?;
    debug!(saturday = %saturday.date_naive(), sunday = %sunday.date_naive(), "resolved weekend");

    let forecast = provider.fetch_forecast(city, unit_group).await?;
    if forecast.is_empty() {
        return Err(PicnicError::NotFound(
            "Weather data does not contain forecast for the next few days".to_string(),
        ));
    }

    let saturday_temperature = forecast.temperature_on(&saturday)?;
    let sunday_temperature = forecast.temperature_on(&sunday)?;
    info!(saturday_temperature, sunday_temperature, %unit_group, "weekend temperatures");

    Ok(WeekendPlan {
        saturday: saturday.date_naive(),
        sunday: sunday.date_naive(),
        saturday_temperature,
        sunday_temperature,
        recommendation: classify(saturday_temperature, sunday_temperature),
    })
}
