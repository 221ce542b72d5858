#[cfg(test)]
mod tests {
    use super::super::value_objects::*;

    #[test]
    fn test_transport_failure_timeout() {
        let result = AccountResult::transport_failure(AccountError::Timeout(
            "operation timed out".to_string(),
        ));

        assert!(!result.checkin_success);
        assert!(!result.status_success);
        assert_eq!(result.outcome, Outcome::Fail);
        assert_eq!(result.email(), "timeout_error");
        assert_eq!(result.message_status, "request timed out");
        assert_eq!(result.check_result, "operation timed out");
        assert_eq!(result.left_days(), 0);
    }

    #[test]
    fn test_transport_failure_connection() {
        let result = AccountResult::transport_failure(AccountError::Connection(
            "connection refused".to_string(),
        ));

        assert_eq!(result.email(), "connection_error");
        assert_eq!(result.message_status, "connection failed");
        assert_eq!(result.points, 0);
        assert_eq!(result.points_change, 0);
    }

    #[test]
    fn test_transport_failure_unknown_includes_detail() {
        let result =
            AccountResult::transport_failure(AccountError::Unknown("bad header".to_string()));

        assert_eq!(result.email(), "unknown_error");
        assert_eq!(result.message_status, "unknown error: bad header");
        assert_eq!(result.check_result, "bad header");
    }

    #[test]
    fn test_email_and_left_days_from_status() {
        let result = AccountResult {
            checkin_success: true,
            status_success: true,
            status: Ok(AccountStatus {
                email: "a@b.com".to_string(),
                left_days: 5,
            }),
            points: 103,
            points_change: 3,
            message_status: "check-in succeeded, points +3".to_string(),
            check_result: "Checkin! Got 3 points.".to_string(),
            outcome: Outcome::Success,
        };

        assert_eq!(result.email(), "a@b.com");
        assert_eq!(result.left_days(), 5);
    }

    #[test]
    fn test_error_tags() {
        assert_eq!(AccountError::Parse("x".into()).tag(), "parse_error");
        assert_eq!(AccountError::Status(502).tag(), "status_error");
        assert_eq!(AccountError::Timeout("x".into()).tag(), "timeout_error");
        assert_eq!(AccountError::Connection("x".into()).tag(), "connection_error");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "success");
        assert_eq!(Outcome::Repeat.to_string(), "repeat");
        assert_eq!(Outcome::Fail.to_string(), "fail");
    }
}
