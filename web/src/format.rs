//! Display formatting for expense amounts and dates.

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
};

/// Prefix shown in front of every amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Shown in place of a date the backend sent in an unrecognised format.
pub const INVALID_DATE: &str = "Invalid Date";

const ISO_DATE_TIME_OFFSET: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]][offset_hour sign:mandatory][optional [:]][offset_minute]"
);
const ISO_DATE_TIME_UTC: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]Z"
);
const ISO_DATE_TIME: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]");
const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
const CALENDAR_DATE: &[FormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// Options that control how the view presents values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Offset used to turn absolute instants into calendar dates.
    pub utc_offset: UtcOffset,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            utc_offset: UtcOffset::UTC,
        }
    }
}

/// Format an amount as the currency symbol followed by the shortest decimal
/// that round-trips, e.g. `$4.5` or `$12`.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// Interpret an ISO-8601 date or date-time string as a calendar date.
///
/// Instants with an offset are shifted into `offset` first. Date-times
/// without an offset and bare dates are already calendar dates and are taken
/// as-is.
pub fn parse_expense_date(raw: &str, offset: UtcOffset) -> Option<Date> {
    let raw = raw.trim();
    let instant = OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(raw, ISO_DATE_TIME_OFFSET))
        .or_else(|_| PrimitiveDateTime::parse(raw, ISO_DATE_TIME_UTC).map(|utc| utc.assume_utc()));
    if let Ok(instant) = instant {
        return Some(instant.to_offset(offset).date());
    }
    if let Ok(local) = PrimitiveDateTime::parse(raw, ISO_DATE_TIME) {
        return Some(local.date());
    }
    Date::parse(raw, ISO_DATE).ok()
}

/// Format an expense date as `M/D/YYYY`, or [INVALID_DATE] if it cannot be
/// parsed.
pub fn format_expense_date(raw: &str, offset: UtcOffset) -> String {
    parse_expense_date(raw, offset)
        .and_then(|date| date.format(CALENDAR_DATE).ok())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
