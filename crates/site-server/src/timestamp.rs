//! UTC timestamps in the `YYYY-MM-DDTHH:MM:SS.mmmZ` form used by the health endpoint.

use chrono::{DateTime, SecondsFormat, Utc};

pub fn now_iso8601() -> String {
    iso8601(Utc::now())
}

pub fn iso8601(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}
