use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since UNIX epoch, the unit of the review API's `from_date`.
pub type EpochSecs = i64;

/// Returns current unix epoch seconds.
pub fn now_secs() -> EpochSecs {
    let dur = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    dur.as_secs() as i64
}
