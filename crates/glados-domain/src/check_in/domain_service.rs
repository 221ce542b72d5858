use super::value_objects::Outcome;

/// Marker the service puts in a message when points were awarded
pub const SUCCESS_MARKER: &str = "Checkin! Got";

/// Marker for an account that already checked in today
pub const REPEAT_MARKER: &str = "Checkin Repeats!";

/// Extract the awarded points from a message like `"Checkin! Got 3 points."`.
///
/// Anything that does not follow that shape yields 0.
pub fn parse_points_change(message: &str) -> i64 {
    if !message.contains(SUCCESS_MARKER) {
        return 0;
    }

    message
        .split_once("Got ")
        .and_then(|(_, rest)| rest.split(" points").next())
        .and_then(|amount| amount.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Classify a check-in from its transport flag and message text.
///
/// Returns the outcome and the human-readable status label.
pub fn classify(checkin_success: bool, check_result: &str, points_change: i64) -> (Outcome, String) {
    if !checkin_success {
        return (
            Outcome::Fail,
            "check-in request failed, please verify".to_string(),
        );
    }

    if check_result.contains(SUCCESS_MARKER) {
        (
            Outcome::Success,
            format!("check-in succeeded, points +{}", points_change),
        )
    } else if check_result.contains(REPEAT_MARKER) {
        (
            Outcome::Repeat,
            "duplicate check-in, retry tomorrow".to_string(),
        )
    } else {
        (Outcome::Fail, "check-in failed, please verify".to_string())
    }
}

/// Truncate a fractional day count toward zero; non-finite values are rejected
pub fn truncate_days(days: f64) -> Option<i64> {
    if days.is_finite() {
        Some(days.trunc() as i64)
    } else {
        None
    }
}
