mod job_source;
mod keyword_source;

pub use job_source::JobSource;
pub use keyword_source::KeywordSource;
