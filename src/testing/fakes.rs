//! In-memory test doubles for the workflow ports.

use std::path::PathBuf;

use crate::domain::{AppError, JobPosting, Keywords};
use crate::ports::{JobSource, KeywordSource};

/// Keyword source that never touches disk.
pub struct FakeKeywordSource {
    keywords: Option<Keywords>,
    missing_path: PathBuf,
}

impl FakeKeywordSource {
    /// Always succeed with `keywords`.
    pub fn returning(keywords: Keywords) -> Self {
        Self {
            keywords: Some(keywords),
            missing_path: PathBuf::new(),
        }
    }

    /// Always fail as if the master resume at `path` were missing.
    pub fn failing(path: impl Into<PathBuf>) -> Self {
        Self {
            keywords: None,
            missing_path: path.into(),
        }
    }
}

impl KeywordSource for FakeKeywordSource {
    fn extract(&self) -> Result<Keywords, AppError> {
        match &self.keywords {
            Some(keywords) => Ok(keywords.clone()),
            None => Err(AppError::DocumentNotFound(self.missing_path.clone())),
        }
    }
}

/// Job source yielding a fixed posting list.
pub struct FakeJobSource {
    postings: Vec<JobPosting>,
}

impl FakeJobSource {
    pub fn with_postings(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }
}

impl JobSource for FakeJobSource {
    fn discover(&self, _keywords: &Keywords, _location: &str) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.postings.clone())
    }
}
