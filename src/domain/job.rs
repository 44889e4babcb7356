/// A single job posting produced by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    /// Hiring company.
    pub company: String,
    /// Advertised role title.
    pub role: String,
    /// Display name of the board the posting came from.
    pub site: String,
    /// Full listing URL.
    pub url: String,
    /// Advertised salary band, e.g. "12-18 LPA".
    pub salary_range: String,
}
