use chrono::{DateTime, Local};
use glados_domain::notification::NotificationMessage;
use glados_domain::AccountResult;

use super::types::RunSummary;

pub const NO_COOKIES_TITLE: &str = "# no cookies found!";
pub const NO_COOKIES_CONTENT: &str = "please verify that the COOKIES environment variable is set";

const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Build the notification for a finished batch.
///
/// A single account's title is its own status label; several accounts get
/// a counter summary instead.
pub fn build_message(
    results: &[AccountResult],
    summary: &RunSummary,
    now: DateTime<Local>,
) -> NotificationMessage {
    let Some(last) = results.last() else {
        return NotificationMessage::new(NO_COOKIES_TITLE, NO_COOKIES_CONTENT);
    };

    let title = if results.len() > 1 {
        format!(
            "GLaDOS check-in complete, success {}, fail {}, repeat {}",
            summary.success, summary.fail, summary.repeat
        )
    } else {
        last.message_status.clone()
    };

    NotificationMessage::new(title, format_report(results, now))
}

/// Render one block per account, separated by a blank line
pub fn format_report(results: &[AccountResult], now: DateTime<Local>) -> String {
    let time_str = now.format(TIME_FORMAT).to_string();

    results
        .iter()
        .enumerate()
        .map(|(index, result)| format_account(index + 1, result, &time_str))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_account(number: usize, result: &AccountResult, time_str: &str) -> String {
    let mut block = format!("--- account {} check-in result ---\n", number);

    if result.checkin_success {
        let change = if result.points_change > 0 {
            format!("+{}", result.points_change)
        } else {
            "0".to_string()
        };
        block.push_str(&format!("points change: {}\n", change));
        block.push_str(&format!("current balance: {}\n", result.points));
    } else {
        block.push_str(&format!("check-in result: {}\n", result.message_status));
    }

    if result.status_success {
        block.push_str(&format!("days left: {} days\n", result.left_days()));
    } else {
        block.push_str("days left: fetch failed\n");
    }

    block.push_str(&format!("check-in time: {}\n", time_str));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use glados_domain::{AccountError, AccountStatus, Outcome};

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 8, 30, 5).unwrap()
    }

    fn success_result() -> AccountResult {
        AccountResult {
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
        }
    }

    #[test]
    fn test_format_successful_account() {
        let report = format_report(&[success_result()], fixed_now());

        assert_eq!(
            report,
            "--- account 1 check-in result ---\n\
             points change: +3\n\
             current balance: 103\n\
             days left: 5 days\n\
             check-in time: 2026/10/19 08:30:05\n"
        );
    }

    #[test]
    fn test_format_failed_account() {
        let failed = AccountResult::transport_failure(AccountError::Connection("refused".into()));
        let report = format_report(&[failed], fixed_now());

        assert!(report.contains("check-in result: connection failed\n"));
        assert!(report.contains("days left: fetch failed\n"));
        assert!(!report.contains("current balance"));
    }

    #[test]
    fn test_zero_points_change_has_no_sign() {
        let mut repeat = success_result();
        repeat.points_change = 0;
        repeat.outcome = Outcome::Repeat;

        let report = format_report(&[repeat], fixed_now());
        assert!(report.contains("points change: 0\n"));
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let report = format_report(&[success_result(), success_result()], fixed_now());

        assert!(report.contains("08:30:05\n\n--- account 2 check-in result ---"));
        assert!(report.ends_with("08:30:05\n"));
    }

    #[test]
    fn test_single_account_title_is_status_label() {
        let results = [success_result()];
        let summary = RunSummary::from_results(&results);
        let message = build_message(&results, &summary, fixed_now());

        assert_eq!(message.title, "check-in succeeded, points +3");
    }

    #[test]
    fn test_multiple_accounts_title_is_summary() {
        let results = [
            success_result(),
            AccountResult::transport_failure(AccountError::Timeout("slow".into())),
        ];
        let summary = RunSummary::from_results(&results);
        let message = build_message(&results, &summary, fixed_now());

        assert_eq!(
            message.title,
            "GLaDOS check-in complete, success 1, fail 1, repeat 0"
        );
    }

    #[test]
    fn test_no_accounts_message() {
        let message = build_message(&[], &RunSummary::default(), fixed_now());

        assert_eq!(message.title, NO_COOKIES_TITLE);
        assert_eq!(message.content, NO_COOKIES_CONTENT);
    }
}
