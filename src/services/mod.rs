mod application_log;
mod cover_letter;
mod resume_keywords;
mod scaffold_assets;
mod site_catalog;
mod tailor;

pub use application_log::JsonFileLog;
pub use cover_letter::CoverLetterWriter;
pub use resume_keywords::ResumeKeywordSource;
pub use scaffold_assets::{EmbeddedScaffold, ScaffoldFile};
pub use site_catalog::{CatalogJobSource, RESULTS_PER_SITE};
pub use tailor::ResumeTailor;
