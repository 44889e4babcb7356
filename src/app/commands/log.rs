//! Read-only views over the application log.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{AppError, ApplicationRecord};
use crate::services::JsonFileLog;

/// Options for listing tracked applications.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
    /// Application log override.
    pub log_file: Option<PathBuf>,
    /// Restrict to entries whose follow-up date has arrived.
    pub due: bool,
}

/// A filtered view over the log.
#[derive(Debug, Clone)]
pub struct LogView {
    /// Entries matching the requested filter, in log order.
    pub entries: Vec<ApplicationRecord>,
    /// Entries in the log before filtering.
    pub total: usize,
}

/// List log entries, optionally only those due for follow-up by `today`.
pub fn execute(log: &JsonFileLog, due_only: bool, today: NaiveDate) -> Result<LogView, AppError> {
    let records = log.read_all()?;
    let total = records.len();

    let entries = if due_only {
        let mut due = Vec::new();
        for record in records {
            if record.follow_up_due(today)? {
                due.push(record);
            }
        }
        due
    } else {
        records
    };

    Ok(LogView { entries, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use tempfile::TempDir;

    use crate::domain::JobPosting;

    fn applied_at(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn record(company: &str, date: &str) -> ApplicationRecord {
        let job = JobPosting {
            company: company.to_string(),
            role: "Product Manager".to_string(),
            site: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/jobs/search/job123".to_string(),
            salary_range: "12-18 LPA".to_string(),
        };
        ApplicationRecord::new(&job, "r.md", "c.txt", applied_at(date))
    }

    #[test]
    fn lists_all_entries_in_log_order() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));
        log.append(record("TechCorp", "2024-03-01 09:00:00")).unwrap();
        log.append(record("InnoSoft", "2024-03-02 09:00:00")).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let view = execute(&log, false, today).unwrap();

        assert_eq!(view.total, 2);
        assert_eq!(view.entries.len(), 2);
        assert_eq!(view.entries[0].company, "TechCorp");
    }

    #[test]
    fn due_filter_keeps_only_arrived_follow_ups() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));
        // Follow-ups land on 2024-03-08 and 2024-06-08.
        log.append(record("TechCorp", "2024-03-01 09:00:00")).unwrap();
        log.append(record("InnoSoft", "2024-06-01 09:00:00")).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let view = execute(&log, true, today).unwrap();

        assert_eq!(view.total, 2);
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].company, "TechCorp");
    }

    #[test]
    fn follow_up_is_due_on_its_exact_date() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));
        log.append(record("TechCorp", "2024-03-01 09:00:00")).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let view = execute(&log, true, today).unwrap();

        assert_eq!(view.entries.len(), 1);
    }

    #[test]
    fn absent_log_yields_an_empty_view() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));

        let today = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let view = execute(&log, false, today).unwrap();

        assert_eq!(view.total, 0);
        assert!(view.entries.is_empty());
    }
}
