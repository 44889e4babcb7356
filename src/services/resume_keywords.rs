use std::path::PathBuf;

use crate::domain::{AppError, Document, Keywords};
use crate::ports::KeywordSource;

/// Keyword source backed by the master resume document.
///
/// The document is loaded and scanned so a missing or unreadable resume
/// fails the run up front, but keyword selection itself still comes from
/// configuration.
#[derive(Debug, Clone)]
pub struct ResumeKeywordSource {
    master_resume: PathBuf,
    keywords: Keywords,
}

impl ResumeKeywordSource {
    pub fn new(master_resume: PathBuf, keywords: Keywords) -> Self {
        Self {
            master_resume,
            keywords,
        }
    }
}

impl KeywordSource for ResumeKeywordSource {
    fn extract(&self) -> Result<Keywords, AppError> {
        let document = Document::load(&self.master_resume)?;
        // TODO: derive keywords from the resume text instead of configuration.
        let scanned = document.full_text();

        println!(
            "Step 1: Extracting keywords from {} ({} paragraphs, {} chars scanned)",
            self.master_resume.display(),
            document.paragraph_count(),
            scanned.len()
        );
        println!(
            "Keywords: roles {:?}, skills {:?}, level '{}'",
            self.keywords.roles, self.keywords.skills, self.keywords.experience_level
        );

        Ok(self.keywords.clone())
    }
}
