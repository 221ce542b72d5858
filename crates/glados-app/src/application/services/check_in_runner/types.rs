use glados_domain::notification::NotificationMessage;
use glados_domain::{AccountResult, Outcome};
use uuid::Uuid;

/// Per-outcome account counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub success: usize,
    pub fail: usize,
    pub repeat: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.success += 1,
            Outcome::Repeat => self.repeat += 1,
            Outcome::Fail => self.fail += 1,
        }
    }

    pub fn from_results(results: &[AccountResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.record(result.outcome);
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.success + self.fail + self.repeat
    }
}

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub results: Vec<AccountResult>,
    pub summary: RunSummary,
    pub message: NotificationMessage,
    /// Gateway response body when the notification went through
    pub delivery: Option<String>,
}

impl RunReport {
    /// Report body for the console; nothing when no account was processed
    pub fn content_to_print(&self) -> Option<&str> {
        if self.results.is_empty() {
            None
        } else {
            Some(&self.message.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glados_domain::AccountError;

    #[test]
    fn test_summary_counts_outcomes() {
        let mut summary = RunSummary::default();
        summary.record(Outcome::Success);
        summary.record(Outcome::Success);
        summary.record(Outcome::Repeat);
        summary.record(Outcome::Fail);

        assert_eq!(
            summary,
            RunSummary {
                success: 2,
                fail: 1,
                repeat: 1
            }
        );
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_summary_from_results() {
        let results = vec![
            AccountResult::transport_failure(AccountError::Timeout("slow".to_string())),
            AccountResult::transport_failure(AccountError::Connection("down".to_string())),
        ];

        let summary = RunSummary::from_results(&results);
        assert_eq!(summary.fail, 2);
        assert_eq!(summary.success, 0);
    }
}
