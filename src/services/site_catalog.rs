use crate::domain::{AppError, JobPosting, Keywords, SiteEntry};
use crate::ports::JobSource;

/// Placeholder postings yielded per site until a real board client lands.
pub const RESULTS_PER_SITE: usize = 2;

/// Synthetic job source walking the configured site catalog.
///
/// Every site yields the same two placeholder postings, in catalog order.
/// No network traffic is involved.
#[derive(Debug, Clone)]
pub struct CatalogJobSource {
    sites: Vec<SiteEntry>,
}

impl CatalogJobSource {
    pub fn new(sites: Vec<SiteEntry>) -> Self {
        Self { sites }
    }
}

impl JobSource for CatalogJobSource {
    fn discover(&self, keywords: &Keywords, location: &str) -> Result<Vec<JobPosting>, AppError> {
        let mut postings = Vec::with_capacity(self.sites.len() * RESULTS_PER_SITE);

        for site in &self.sites {
            println!(
                "Searching {} for {:?} in {}...",
                site.name, keywords.roles, location
            );
            // TODO: query the board over HTTP once per-site clients exist.
            postings.push(placeholder(
                site,
                "TechCorp",
                "Product Manager",
                "job123",
                "12-18 LPA",
            ));
            postings.push(placeholder(
                site,
                "InnoSoft",
                "Senior Delivery Manager",
                "job456",
                "15-20 LPA",
            ));
        }

        Ok(postings)
    }
}

/// Build one placeholder posting, joining the listing id onto the site's
/// base URL without disturbing any path it already carries.
fn placeholder(
    site: &SiteEntry,
    company: &str,
    role: &str,
    listing: &str,
    salary: &str,
) -> JobPosting {
    JobPosting {
        company: company.to_string(),
        role: role.to_string(),
        site: site.name.clone(),
        url: format!(
            "{}/{}",
            site.base_url.as_str().trim_end_matches('/'),
            listing
        ),
        salary_range: salary.to_string(),
    }
}
