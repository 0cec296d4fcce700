//! NSE trading session check and exchange-local dates.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Timelike, Utc, Weekday};

/// India Standard Time offset (UTC+05:30, no daylight saving).
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Session open, inclusive.
const SESSION_OPEN: (u32, u32) = (9, 15);

/// Session close, inclusive.
const SESSION_CLOSE: (u32, u32) = (15, 30);

/// Converts `now` to India Standard Time.
fn to_exchange_time(now: DateTime<Utc>) -> Option<DateTime<FixedOffset>> {
    FixedOffset::east_opt(IST_OFFSET_SECS).map(|ist| now.with_timezone(&ist))
}

/// Returns the calendar date in India at `now`.
///
/// Between 18:30 and 24:00 UTC this is the day after the UTC date.
#[must_use]
pub fn exchange_date(now: DateTime<Utc>) -> NaiveDate {
    to_exchange_time(now).map_or_else(|| now.date_naive(), |local| local.date_naive())
}

/// Returns true between 09:15 and 15:30 IST, Monday to Friday, both ends inclusive.
///
/// Exchange holidays are not modelled.
#[must_use]
pub fn is_market_open(now: DateTime<Utc>) -> bool {
    let Some(local) = to_exchange_time(now) else {
        return false;
    };

    if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }

    let minute_of_day = |(h, m): (u32, u32)| h * 60 + m;
    let time: NaiveTime = local.time();
    let current = minute_of_day((time.hour(), time.minute()));

    current >= minute_of_day(SESSION_OPEN) && current <= minute_of_day(SESSION_CLOSE)
}
