//! Resolving "the next Saturday" style dates.
//!
//! Weekday indices count from Sunday: 0 = Sunday .. 6 = Saturday.

use chrono::{DateTime, Datelike, Days, Duration, LocalResult, Offset, TimeZone, Weekday};

use crate::error::{PicnicError, Result};

/// Weekday index in `0..=6`, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    pub const SUNDAY: WeekdayIndex = WeekdayIndex(0);
    pub const SATURDAY: WeekdayIndex = WeekdayIndex(6);

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn of(weekday: Weekday) -> Self {
        WeekdayIndex(weekday.num_days_from_sunday() as u8)
    }
}

fn out_of_range() -> PicnicError {
    PicnicError::InvalidArgument("Invalid argument for day of week. Must be between 0 and 6".into())
}

impl TryFrom<i64> for WeekdayIndex {
    type Error = PicnicError;

    fn try_from(value: i64) -> Result<Self> {
        if (0..=6).contains(&value) {
            Ok(WeekdayIndex(value as u8))
        } else {
            Err(out_of_range())
        }
    }
}

/// Fractional indices are truncated toward zero before the range check.
impl TryFrom<f64> for WeekdayIndex {
    type Error = PicnicError;

    fn try_from(value: f64) -> Result<Self> {
        let truncated = value.trunc();
        if truncated.is_nan() || !(0.0..=6.0).contains(&truncated) {
            return Err(out_of_range());
        }
        Ok(WeekdayIndex(truncated as u8))
    }
}

impl From<Weekday> for WeekdayIndex {
    fn from(weekday: Weekday) -> Self {
        WeekdayIndex::of(weekday)
    }
}

/// Next date on `target`, counting `reference` itself.
///
/// Time of day is kept from `reference` where the target day has that
/// wall-clock time. A time that repeats on the target day resolves to its
/// earlier instant; a time skipped by a DST gap moves forward by the gap.
pub fn next_occurrence<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    target: WeekdayIndex,
) -> Result<DateTime<Tz>> {
    let current = reference.weekday().num_days_from_sunday() as i64;
    let mut diff = target.get() as i64 - current;
    if diff < 0 {
        diff += 7;
    }
    if diff == 0 {
        return Ok(reference.clone());
    }

    let overflow = || {
        PicnicError::InvalidArgument(format!(
            "Cannot resolve weekday {} from {}: date out of range",
            target.get(),
            reference.date_naive()
        ))
    };

    let naive = reference
        .naive_local()
        .checked_add_days(Days::new(diff as u64))
        .ok_or_else(overflow)?;

    let tz = reference.timezone();
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(resolved) => Ok(resolved),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            // Read the skipped wall-clock time with the offset in force before the gap.
            let before = naive.checked_sub_signed(Duration::days(1)).ok_or_else(overflow)?;
            let offset = tz.offset_from_utc_datetime(&before).fix().local_minus_utc();
            let utc = naive
                .checked_sub_signed(Duration::seconds(offset as i64))
                .ok_or_else(overflow)?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}
