//! Turning a weekend's temperatures into a picnic recommendation.

/// Temperature both days must exceed for the weekend to count as nice.
pub const PICNIC_THRESHOLD: f64 = 10.0;

/// Recommendation sentence for the given Saturday and Sunday mean temperatures.
///
/// Boundaries are exclusive. When neither day is strictly above the
/// threshold but they are not both strictly below it (one sits exactly on
/// it), Sunday is recommended. Equal warm days also go to Sunday.
pub fn classify(saturday_temp: f64, sunday_temp: f64) -> String {
    if saturday_temp < PICNIC_THRESHOLD && sunday_temp < PICNIC_THRESHOLD {
        "The weather isn’t looking very good this weekend, maybe stay indoors.".to_string()
    } else if saturday_temp > PICNIC_THRESHOLD && sunday_temp > PICNIC_THRESHOLD {
        let best = if saturday_temp > sunday_temp { "Saturday" } else { "Sunday" };
        format!("This weekend looks nice for a picnic, {best} is best because it's hotter!.")
    } else {
        let day = if saturday_temp > PICNIC_THRESHOLD { "Saturday" } else { "Sunday" };
        format!("You should have your picnic on {day}.")
    }
}
