//! Duration parsing utilities.
//!
//! This module parses the human-friendly duration strings accepted on the
//! command line (e.g., "1s", "250ms") into [`Duration`] values, using the
//! same grammar as the YAML `time_unit` field.

use std::time::Duration;

/// Parse duration string (e.g., "250ms", "1s", "1s 500ms") to a [`Duration`]
///
/// Accepts everything `humantime` does ("ms", "s", "min"/"m", "h", ... and
/// combinations such as "1m 30s"), plus a bare number meaning seconds.
/// Values too large to represent are rejected rather than wrapped.
///
/// # Arguments
/// * `duration` - The duration string to parse
///
/// # Returns
/// * `Ok(Duration)` - The parsed duration
/// * `Err(String)` - An error message if parsing fails
///
/// # Examples
/// ```
/// use symposium::utils::duration::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("2"), Ok(Duration::from_secs(2)));
/// assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
/// assert_eq!(parse_duration("1m"), Ok(Duration::from_secs(60)));
/// assert!(parse_duration("invalid").is_err());
/// ```
pub fn parse_duration(duration: &str) -> Result<Duration, String> {
    let duration = duration.trim();

    if !duration.is_empty() && duration.chars().all(|c| c.is_ascii_digit()) {
        return duration
            .parse()
            .map(Duration::from_secs)
            .map_err(|_| format!("Invalid duration format: {}", duration));
    }

    humantime::parse_duration(duration)
        .map_err(|e| format!("Invalid duration format: {} ({})", duration, e))
}
