//! Time display helpers

/// Format seconds as `M:SS`
///
/// Seconds are truncated and zero-padded; minutes have no upper bound.
/// Negative or non-finite input formats as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Progress through a track as a percentage
///
/// 0 when the duration is unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        current_time / duration * 100.0
    } else {
        0.0
    }
}
