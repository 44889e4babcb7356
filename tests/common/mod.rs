//! Shared testing utilities for jobflow CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use jobflow::ApplicationRecord;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `jobflow` binary within the
    /// default working directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `jobflow` binary within a
    /// custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("jobflow").expect("Failed to locate jobflow binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Path of `name` inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Write a minimal master resume containing one skills paragraph.
    pub fn write_master_resume(&self) {
        let content = "# Resume\n\nSeasoned delivery manager.\n\nSkills: Agile, SaaS\n\nEducation: MBA\n";
        fs::write(self.path("resume_master.md"), content)
            .expect("Failed to write master resume");
    }

    /// Write `content` as the workflow config.
    pub fn write_config(&self, content: &str) {
        fs::write(self.path("jobflow.toml"), content).expect("Failed to write config");
    }

    /// Parse the application log in the working directory.
    pub fn read_log(&self) -> Vec<ApplicationRecord> {
        let content = fs::read_to_string(self.path("applications_log.json"))
            .expect("Failed to read applications log");
        serde_json::from_str(&content).expect("Applications log should hold a JSON array")
    }

    /// Count files in the working directory whose name starts with `prefix`.
    pub fn count_files_with_prefix(&self, prefix: &str) -> usize {
        fs::read_dir(self.work_dir())
            .expect("Failed to read work dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(prefix))
            .count()
    }

    /// Assert the application log does not exist.
    pub fn assert_log_not_exists(&self) {
        assert!(
            !self.path("applications_log.json").exists(),
            "applications log should not exist"
        );
    }

    /// Assert no generated artifacts (resumes, letters, log) are present.
    pub fn assert_no_artifacts(&self) {
        assert_eq!(self.count_files_with_prefix("Resume_"), 0, "no tailored resumes expected");
        assert_eq!(self.count_files_with_prefix("CoverLetter_"), 0, "no cover letters expected");
        self.assert_log_not_exists();
    }
}
