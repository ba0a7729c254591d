//! Derived display values

/// Elapsed time as a percentage of the duration, in `[0, 100]`
///
/// Returns 0 when the duration is not a positive finite number or the
/// elapsed time is negative or not finite.
pub fn progress_percent(elapsed: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    if !elapsed.is_finite() || elapsed < 0.0 {
        return 0.0;
    }
    (elapsed / duration * 100.0).clamp(0.0, 100.0)
}

/// Render seconds as `m:ss`
///
/// Fractions are truncated; negative, NaN and infinite inputs render as
/// `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.99), "0:59");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn invalid_times_render_zero() {
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(f64::NEG_INFINITY), "0:00");
    }

    #[test]
    fn progress_edges() {
        assert_eq!(progress_percent(10.0, 0.0), 0.0);
        assert_eq!(progress_percent(-1.0, 100.0), 0.0);
        assert_eq!(progress_percent(100.0, 100.0), 100.0);
        assert_eq!(progress_percent(50.0, 100.0), 50.0);
        assert_eq!(progress_percent(150.0, 100.0), 100.0);
        assert_eq!(progress_percent(10.0, f64::NAN), 0.0);
        assert_eq!(progress_percent(f64::NAN, 100.0), 0.0);
        assert_eq!(progress_percent(10.0, -5.0), 0.0);
    }
}
