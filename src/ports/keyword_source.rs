use crate::domain::{AppError, Keywords};

/// Source of the keyword set driving discovery.
///
/// The shipped implementation reads the master resume and returns configured
/// values; a real extraction backend can replace it without touching the
/// workflow driver.
pub trait KeywordSource {
    /// Produce the keywords to search with.
    fn extract(&self) -> Result<Keywords, AppError>;
}
