use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, Document, JobPosting, naming};

/// Paragraph marker that receives role-specific additions.
const SKILLS_MARKER: &str = "skills";

/// Derives job-specific resume copies from the master document.
#[derive(Debug, Clone)]
pub struct ResumeTailor {
    master_resume: PathBuf,
    output_dir: PathBuf,
}

impl ResumeTailor {
    pub fn new(master_resume: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            master_resume,
            output_dir,
        }
    }

    /// Produce a tailored copy for `job`, returning the file name written.
    ///
    /// The master document is re-read on every call so edits between jobs
    /// are picked up. A missing master maps to
    /// [`AppError::DocumentNotFound`], which the workflow driver treats as
    /// "skip this job".
    pub fn tailor(&self, job: &JobPosting) -> Result<String, AppError> {
        let mut document = Document::load(&self.master_resume)?;

        let suffix = format!(" - {}", job.role);
        document.append_where(|p| p.to_lowercase().contains(SKILLS_MARKER), &suffix);

        let file_name = naming::resume_file_name(&job.company, &job.role);
        fs::create_dir_all(&self.output_dir)?;
        document.save(&self.output_dir.join(&file_name))?;

        Ok(file_name)
    }
}
