use crate::domain::{AppError, JobPosting, Keywords};

/// Source of job postings.
///
/// Implementations decide where postings come from; the driver only needs an
/// ordered list back.
pub trait JobSource {
    /// Discover postings for the given keywords and location.
    fn discover(&self, keywords: &Keywords, location: &str) -> Result<Vec<JobPosting>, AppError>;
}
