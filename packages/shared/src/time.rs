use chrono::{DateTime, FixedOffset, Offset, Utc};

/// JST is UTC+9
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Get the current wall-clock time in JST
pub fn now_jst() -> DateTime<FixedOffset> {
    let jst_offset = FixedOffset::east_opt(JST_OFFSET_SECONDS).unwrap_or(Utc.fix());
    Utc::now().with_timezone(&jst_offset)
}

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    now_jst().timestamp_millis()
}
