//! jobflow: automate a CV-based job application workflow.
//!
//! One run extracts keywords from the master resume, walks the configured
//! job boards, produces a tailored resume and cover letter per posting, and
//! appends every application to a JSON tracking log.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::env;
use std::path::Path;

use chrono::Local;

use app::AppContext;
use app::commands::{init as init_cmd, log as log_cmd, run as run_cmd};
use domain::WorkflowConfig;
use services::{
    CatalogJobSource, CoverLetterWriter, JsonFileLog, ResumeKeywordSource, ResumeTailor,
};

pub use app::commands::init::{InitOptions, InitOutcome};
pub use app::commands::log::{LogOptions, LogView};
pub use app::commands::run::{RunOptions, RunOutcome, SkippedJob};
pub use domain::{AppError, ApplicationRecord, ApplicationStatus};

const BANNER: &str = "============================================================";

/// Scaffold a starter workspace (config plus sample master resume) in the
/// current directory.
pub fn init(options: InitOptions) -> Result<InitOutcome, AppError> {
    let root = env::current_dir()?;
    let outcome = init_cmd::execute(&root, &options)?;

    for path in &outcome.created {
        println!("✅ Created {path}");
    }
    for path in &outcome.preserved {
        println!("Kept existing {path}");
    }
    println!("Edit jobflow.toml and resume_master.md, then run 'jobflow run'.");
    Ok(outcome)
}

/// Execute the application workflow once.
pub fn run(options: RunOptions) -> Result<RunOutcome, AppError> {
    let config = load_config(options.config.as_deref(), &options)?;

    println!("{BANNER}");
    println!("CV-Based Job Application Automation");
    println!("{BANNER}");

    let ctx = AppContext::new(
        ResumeKeywordSource::new(config.paths.master_resume.clone(), config.keywords.clone()),
        CatalogJobSource::new(config.sites.clone()),
        ResumeTailor::new(
            config.paths.master_resume.clone(),
            config.paths.output_dir.clone(),
        ),
        CoverLetterWriter::new(config.paths.output_dir.clone(), config.profile.clone()),
        JsonFileLog::new(config.paths.log_file.clone()),
    );

    let outcome = run_cmd::execute(&ctx, &config.search.location, options.dry_run)?;

    println!("\n{BANNER}");
    if outcome.dry_run {
        println!(
            "Dry run complete: {} jobs discovered, nothing written.",
            outcome.jobs_found
        );
    } else {
        println!("✅ Job application workflow completed successfully!");
        println!(
            "Applied: {}, skipped: {}.",
            outcome.applied.len(),
            outcome.skipped.len()
        );
        println!(
            "Check '{}' for application tracking.",
            config.paths.log_file.display()
        );
    }
    println!("{BANNER}");

    Ok(outcome)
}

/// Read tracked applications, optionally only those due for follow-up today.
pub fn log_entries(options: LogOptions) -> Result<LogView, AppError> {
    let mut config = WorkflowConfig::load(options.config.as_deref())?;
    if let Some(log_file) = &options.log_file {
        config.paths.log_file = log_file.clone();
    }

    let log = JsonFileLog::new(config.paths.log_file.clone());
    log_cmd::execute(&log, options.due, Local::now().date_naive())
}

/// Load configuration and apply command-line overrides on top.
fn load_config(explicit: Option<&Path>, options: &RunOptions) -> Result<WorkflowConfig, AppError> {
    let mut config = WorkflowConfig::load(explicit)?;

    if let Some(resume) = &options.resume {
        config.paths.master_resume = resume.clone();
    }
    if let Some(location) = &options.location {
        config.search.location = location.clone();
    }
    if let Some(output_dir) = &options.output_dir {
        config.paths.output_dir = output_dir.clone();
    }
    if let Some(log_file) = &options.log_file {
        config.paths.log_file = log_file.clone();
    }

    Ok(config)
}
