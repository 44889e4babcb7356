use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::error::AppError;
use crate::domain::job::JobPosting;

/// Timestamp format used for the `date` field.
pub const APPLIED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Date format used for the `follow_up_date` field.
pub const FOLLOW_UP_FORMAT: &str = "%Y-%m-%d";
/// Days between applying and the scheduled follow-up.
pub const FOLLOW_UP_DAYS: i64 = 7;

/// Lifecycle status of a tracked application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Applied => write!(f, "Applied"),
        }
    }
}

/// One persisted record in the application log.
///
/// Timestamps are stored as formatted strings so the on-disk JSON stays
/// human-editable; [`ApplicationRecord::follow_up_on`] parses them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub date: String,
    pub company: String,
    pub role: String,
    pub site: String,
    pub url: String,
    pub resume: String,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    pub follow_up_date: String,
}

impl ApplicationRecord {
    /// Build a record for `job` applied at `applied_at`, with the follow-up
    /// scheduled exactly [`FOLLOW_UP_DAYS`] later.
    pub fn new(
        job: &JobPosting,
        resume_file: &str,
        cover_letter_file: &str,
        applied_at: NaiveDateTime,
    ) -> Self {
        let follow_up = applied_at + Duration::days(FOLLOW_UP_DAYS);
        Self {
            date: applied_at.format(APPLIED_AT_FORMAT).to_string(),
            company: job.company.clone(),
            role: job.role.clone(),
            site: job.site.clone(),
            url: job.url.clone(),
            resume: resume_file.to_string(),
            cover_letter: cover_letter_file.to_string(),
            status: ApplicationStatus::Applied,
            follow_up_date: follow_up.format(FOLLOW_UP_FORMAT).to_string(),
        }
    }

    /// Parse the stored follow-up date.
    pub fn follow_up_on(&self) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(&self.follow_up_date, FOLLOW_UP_FORMAT).map_err(|err| {
            AppError::ParseError {
                what: format!("follow_up_date '{}'", self.follow_up_date),
                details: err.to_string(),
            }
        })
    }

    /// True once the follow-up date has arrived.
    pub fn follow_up_due(&self, today: NaiveDate) -> Result<bool, AppError> {
        Ok(self.follow_up_on()? <= today)
    }
}
