use crate::ports::{JobSource, KeywordSource};
use crate::services::{CoverLetterWriter, JsonFileLog, ResumeTailor};

/// Application context holding the pieces a workflow run needs.
pub struct AppContext<K: KeywordSource, J: JobSource> {
    keywords: K,
    jobs: J,
    tailor: ResumeTailor,
    letters: CoverLetterWriter,
    log: JsonFileLog,
}

impl<K: KeywordSource, J: JobSource> AppContext<K, J> {
    /// Create a new application context.
    pub fn new(
        keywords: K,
        jobs: J,
        tailor: ResumeTailor,
        letters: CoverLetterWriter,
        log: JsonFileLog,
    ) -> Self {
        Self {
            keywords,
            jobs,
            tailor,
            letters,
            log,
        }
    }

    /// Get a reference to the keyword source.
    pub fn keywords(&self) -> &K {
        &self.keywords
    }

    /// Get a reference to the job source.
    pub fn jobs(&self) -> &J {
        &self.jobs
    }

    /// Get a reference to the resume tailor.
    pub fn tailor(&self) -> &ResumeTailor {
        &self.tailor
    }

    /// Get a reference to the cover letter writer.
    pub fn letters(&self) -> &CoverLetterWriter {
        &self.letters
    }

    /// Get a reference to the application log.
    pub fn log(&self) -> &JsonFileLog {
        &self.log
    }
}
