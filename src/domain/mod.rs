pub mod application;
pub mod config;
pub mod document;
pub mod error;
pub mod job;
pub mod keywords;
pub mod naming;

pub use application::{ApplicationRecord, ApplicationStatus, FOLLOW_UP_DAYS};
pub use config::{CONFIG_FILE, PathsConfig, Profile, SearchConfig, SiteEntry, WorkflowConfig};
pub use document::Document;
pub use error::AppError;
pub use job::JobPosting;
pub use keywords::Keywords;
