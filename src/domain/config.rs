//! Workflow configuration loaded from `jobflow.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::AppError;
use crate::domain::keywords::Keywords;

/// Config file looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "jobflow.toml";

/// Complete configuration for one workflow run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkflowConfig {
    /// File locations used by the run.
    #[serde(default)]
    pub paths: PathsConfig,
    /// Discovery parameters.
    #[serde(default)]
    pub search: SearchConfig,
    /// Applicant details rendered into cover letters.
    #[serde(default)]
    pub profile: Profile,
    /// Keyword set the extraction step reports.
    #[serde(default)]
    pub keywords: Keywords,
    /// Job boards walked during discovery.
    #[serde(default = "default_sites")]
    pub sites: Vec<SiteEntry>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            search: SearchConfig::default(),
            profile: Profile::default(),
            keywords: Keywords::default(),
            sites: default_sites(),
        }
    }
}

impl WorkflowConfig {
    /// Parse and validate configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: WorkflowConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicitly given `path` must exist. Otherwise `jobflow.toml` in the
    /// current directory is used when present, and compiled-in defaults when
    /// not.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(AppError::ConfigFileNotFound(explicit.to_path_buf()));
                }
                Self::parse_toml(&fs::read_to_string(explicit)?)
            }
            None => {
                let fallback = Path::new(CONFIG_FILE);
                if fallback.exists() {
                    Self::parse_toml(&fs::read_to_string(fallback)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Check cross-field invariants a parsed config must satisfy.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.paths.master_resume.as_os_str().is_empty() {
            return Err(AppError::config_error(
                "paths.master_resume must not be empty",
            ));
        }
        if self.paths.log_file.as_os_str().is_empty() {
            return Err(AppError::config_error("paths.log_file must not be empty"));
        }
        if self.search.location.trim().is_empty() {
            return Err(AppError::config_error("search.location must not be empty"));
        }
        if self.keywords.is_empty() {
            return Err(AppError::config_error(
                "keywords must list at least one role or skill",
            ));
        }
        if self.sites.is_empty() {
            return Err(AppError::config_error(
                "at least one [[sites]] entry is required",
            ));
        }
        for site in &self.sites {
            site.validate()?;
        }
        Ok(())
    }
}

/// File locations used by the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Master resume every tailored copy derives from.
    #[serde(default = "default_master_resume")]
    pub master_resume: PathBuf,
    /// Directory receiving tailored resumes and cover letters.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// JSON application log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            master_resume: default_master_resume(),
            output_dir: default_output_dir(),
            log_file: default_log_file(),
        }
    }
}

/// Discovery parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Location string handed to every job source.
    #[serde(default = "default_location")]
    pub location: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

/// Applicant details rendered into the cover letter signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default = "default_profile_contact")]
    pub contact: String,
    #[serde(default = "default_profile_linkedin")]
    pub linkedin: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            contact: default_profile_contact(),
            linkedin: default_profile_linkedin(),
        }
    }
}

/// One job board the discoverer walks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteEntry {
    /// Display name, e.g. "LinkedIn".
    pub name: String,
    /// Base URL synthetic listing paths are joined onto.
    pub base_url: Url,
}

impl SiteEntry {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidSite {
                name: self.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidSite {
                name: self.name.clone(),
                reason: format!("unsupported URL scheme '{}'", self.base_url.scheme()),
            });
        }
        Ok(())
    }
}

fn default_master_resume() -> PathBuf {
    PathBuf::from("resume_master.md")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("applications_log.json")
}

fn default_location() -> String {
    "India".to_string()
}

fn default_profile_name() -> String {
    "Your Name".to_string()
}

fn default_profile_contact() -> String {
    "[Your Contact Info]".to_string()
}

fn default_profile_linkedin() -> String {
    "https://linkedin.com/in/your-profile".to_string()
}

fn default_sites() -> Vec<SiteEntry> {
    [
        ("LinkedIn", "https://www.linkedin.com/jobs/search"),
        ("Naukri", "https://www.naukri.com"),
        ("Indeed", "https://www.indeed.co.in"),
        ("Glassdoor", "https://www.glassdoor.co.in"),
        ("Monster", "https://www.monsterindia.com"),
    ]
    .into_iter()
    .map(|(name, base)| SiteEntry {
        name: name.to_string(),
        base_url: Url::parse(base).expect("default site URL must be valid"),
    })
    .collect()
}
