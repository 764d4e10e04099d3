use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// All posting and scheduling happens in Moscow time.
pub const MSK: Tz = chrono_tz::Europe::Moscow;

/// Current wall-clock time in Moscow.
pub fn now_msk() -> DateTime<Tz> {
    Utc::now().with_timezone(&MSK)
}
