use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ApplicationRecord};

/// JSON-array application log on disk.
///
/// Appending re-reads the whole array and atomically rewrites it through a
/// sibling temp file plus rename, so readers never observe a half-written
/// log. Single writer assumed: there is no file locking, and concurrent
/// processes appending to the same log would race.
#[derive(Debug, Clone)]
pub struct JsonFileLog {
    path: PathBuf,
}

impl JsonFileLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, returning it once the rewrite is durable.
    pub fn append(&self, record: ApplicationRecord) -> Result<ApplicationRecord, AppError> {
        let mut records = self.read_all()?;
        records.push(record.clone());
        self.write_atomic(&records)?;
        Ok(record)
    }

    /// Read every record in log order.
    ///
    /// An absent log reads as empty; content that is not a JSON array of
    /// records is an error naming the file.
    pub fn read_all(&self) -> Result<Vec<ApplicationRecord>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content).map_err(|err| AppError::MalformedLog {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        })
    }

    fn write_atomic(&self, records: &[ApplicationRecord]) -> Result<(), AppError> {
        let serialized =
            serde_json::to_string_pretty(records).map_err(|err| AppError::MalformedLog {
                path: self.path.display().to_string(),
                reason: err.to_string(),
            })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, format!("{serialized}\n"))?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Sibling path on the same filesystem, so the rename stays atomic.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("applications_log.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::domain::JobPosting;

    fn record(company: &str) -> ApplicationRecord {
        let job = JobPosting {
            company: company.to_string(),
            role: "Product Manager".to_string(),
            site: "LinkedIn".to_string(),
            url: "https://www.linkedin.com/jobs/search/job123".to_string(),
            salary_range: "12-18 LPA".to_string(),
        };
        let applied_at = NaiveDate::from_ymd_opt(2024, 3, 28)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        ApplicationRecord::new(&job, "r.md", "c.txt", applied_at)
    }

    #[test]
    fn append_creates_the_log_on_first_use() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));

        let appended = log.append(record("TechCorp")).unwrap();

        assert_eq!(appended.company, "TechCorp");
        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], appended);
    }

    #[test]
    fn append_grows_the_log_monotonically() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));

        log.append(record("TechCorp")).unwrap();
        log.append(record("InnoSoft")).unwrap();
        log.append(record("TechCorp")).unwrap();

        let records = log.read_all().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].company, "InnoSoft");
    }

    #[test]
    fn absent_log_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn malformed_log_is_reported_with_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications_log.json");
        fs::write(&path, "{\"not\": \"an array\"}").unwrap();

        let log = JsonFileLog::new(path);
        let err = log.read_all().unwrap_err();

        assert!(matches!(err, AppError::MalformedLog { .. }));
        assert!(err.to_string().contains("applications_log.json"));
    }

    #[test]
    fn append_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let log = JsonFileLog::new(dir.path().join("applications_log.json"));

        log.append(record("TechCorp")).unwrap();

        assert!(!dir.path().join("applications_log.json.tmp").exists());
        assert!(dir.path().join("applications_log.json").exists());
    }

    #[test]
    fn log_is_written_as_a_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("applications_log.json");
        let log = JsonFileLog::new(path.clone());

        log.append(record("TechCorp")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        assert!(content.contains("\"status\": \"Applied\""));
        assert!(content.ends_with("\n"));
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tracking").join("applications_log.json");
        let log = JsonFileLog::new(path.clone());

        log.append(record("TechCorp")).unwrap();

        assert!(path.exists());
    }
}
