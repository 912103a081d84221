//! Current calendar year for the footer.
//!
//! Both render paths derive the year from a UTC timestamp so SSR and
//! hydration agree regardless of the visitor's time zone. Builds with neither
//! feature (unit tests) fall back to a fixed year.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

pub const FALLBACK_YEAR: i32 = 2025;

pub fn current_year() -> i32 {
    now_unix_seconds().map_or(FALLBACK_YEAR, year_from_unix_seconds)
}

/// UTC calendar year containing `secs` seconds after the Unix epoch.
pub fn year_from_unix_seconds(secs: i64) -> i32 {
    time::OffsetDateTime::from_unix_timestamp(secs).map_or(FALLBACK_YEAR, |t| t.year())
}

#[allow(clippy::unnecessary_wraps)]
fn now_unix_seconds() -> Option<i64> {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
        Some(secs)
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        Some(time::OffsetDateTime::now_utc().unix_timestamp())
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        None
    }
}
