//! Wall-clock helpers pinned to UTC+8 (Asia/Shanghai, which has no DST).

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Timelike, Utc};

/// `%Y-%m-%d %H:%M:%S`
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 2] = [FORMAT, "%Y-%m-%dT%H:%M:%S"];
const SHANGHAI_OFFSET_SECS: i32 = 8 * 3600;

#[derive(Debug, thiserror::Error)]
#[error("unrecognized datetime: '{0}'")]
pub struct ParseError(pub String);

/// Parse RFC 3339, `%Y-%m-%d %H:%M:%S`, `%Y-%m-%dT%H:%M:%S` or `%Y-%m-%d`.
///
/// Any offset is dropped as-is (the wall-clock fields are kept) and
/// sub-second precision is truncated.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, ParseError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(whole_seconds(dt.naive_local()));
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| ParseError(s.to_owned()))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(FORMAT).to_string()
}

fn shanghai() -> FixedOffset {
    FixedOffset::east_opt(SHANGHAI_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Current Shanghai wall-clock time, whole seconds.
pub fn datetime_now() -> NaiveDateTime {
    whole_seconds(Utc::now().with_timezone(&shanghai()).naive_local())
}

/// Current Shanghai time as `%H:%M:%S`.
pub fn time_now() -> String {
    datetime_now().format("%H:%M:%S").to_string()
}

fn whole_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}
