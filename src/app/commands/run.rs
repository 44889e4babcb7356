//! The application workflow: extract, discover, tailor, write, log.

use std::path::PathBuf;

use chrono::Local;

use crate::app::AppContext;
use crate::domain::{AppError, ApplicationRecord, Keywords};
use crate::ports::{JobSource, KeywordSource};

/// Options controlling one workflow run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
    /// Master resume override.
    pub resume: Option<PathBuf>,
    /// Search location override.
    pub location: Option<String>,
    /// Output directory override.
    pub output_dir: Option<PathBuf>,
    /// Application log override.
    pub log_file: Option<PathBuf>,
    /// Discover and list jobs without writing anything.
    pub dry_run: bool,
}

/// A job the run skipped, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedJob {
    pub company: String,
    pub role: String,
    pub reason: String,
}

/// Summary of one workflow run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Keywords the extraction step produced.
    pub keywords: Keywords,
    /// Postings discovery returned, before any skips.
    pub jobs_found: usize,
    /// Records appended to the log, in application order.
    pub applied: Vec<ApplicationRecord>,
    /// Jobs skipped instead of applied.
    pub skipped: Vec<SkippedJob>,
    pub dry_run: bool,
}

/// Execute the workflow once.
///
/// Keyword extraction failure aborts the whole run. A master document that
/// goes missing by tailoring time skips only the affected job; every other
/// error propagates and stops the loop.
pub fn execute<K, J>(
    ctx: &AppContext<K, J>,
    location: &str,
    dry_run: bool,
) -> Result<RunOutcome, AppError>
where
    K: KeywordSource,
    J: JobSource,
{
    let keywords = ctx.keywords().extract()?;

    println!("\nStep 2: Discovering job opportunities...");
    let jobs = ctx.jobs().discover(&keywords, location)?;
    println!("Found {} job opportunities.", jobs.len());

    let mut applied = Vec::new();
    let mut skipped = Vec::new();

    println!("\nStep 3: Preparing applications...");
    for (idx, job) in jobs.iter().enumerate() {
        println!("\n--- Application {}: {} ---", idx + 1, job.company);

        if dry_run {
            println!(
                "[dry-run] {} - {} via {} ({})",
                job.company, job.role, job.site, job.url
            );
            continue;
        }

        let resume_file = match ctx.tailor().tailor(job) {
            Ok(file_name) => file_name,
            Err(AppError::DocumentNotFound(path)) => {
                let reason = format!("master resume not found: {}", path.display());
                println!("Skipping {} - {}", job.company, reason);
                skipped.push(SkippedJob {
                    company: job.company.clone(),
                    role: job.role.clone(),
                    reason,
                });
                continue;
            }
            Err(err) => return Err(err),
        };
        println!("Tailored resume saved: {resume_file}");

        let cover_letter_file = ctx.letters().write(job)?;
        println!("Cover letter saved: {cover_letter_file}");

        let record = ApplicationRecord::new(
            job,
            &resume_file,
            &cover_letter_file,
            Local::now().naive_local(),
        );
        let record = ctx.log().append(record)?;
        println!("Application logged: {} - {}", record.company, record.role);
        applied.push(record);
    }

    Ok(RunOutcome {
        keywords,
        jobs_found: jobs.len(),
        applied,
        skipped,
        dry_run,
    })
}
