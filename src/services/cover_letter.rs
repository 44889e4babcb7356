use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, JobPosting, Profile, naming};

static TEMPLATE: &str = include_str!("../assets/templates/cover_letter.txt");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Renders and writes per-job cover letters from the embedded template.
#[derive(Debug, Clone)]
pub struct CoverLetterWriter {
    output_dir: PathBuf,
    profile: Profile,
}

impl CoverLetterWriter {
    pub fn new(output_dir: PathBuf, profile: Profile) -> Self {
        Self {
            output_dir,
            profile,
        }
    }

    /// Render the letter for `job` without touching disk.
    pub fn render(&self, job: &JobPosting) -> Result<String, AppError> {
        environment()
            .render_str(
                TEMPLATE,
                context! {
                    company => job.company,
                    role => job.role,
                    name => self.profile.name,
                    contact => self.profile.contact,
                    linkedin => self.profile.linkedin,
                },
            )
            .map_err(|err| AppError::Template(err.to_string()))
    }

    /// Write the rendered letter, returning the file name.
    ///
    /// An existing letter for the same company and role is overwritten
    /// silently.
    pub fn write(&self, job: &JobPosting) -> Result<String, AppError> {
        let content = self.render(job)?;
        let file_name = naming::cover_letter_file_name(&job.company, &job.role);
        fs::create_dir_all(&self.output_dir)?;
        fs::write(self.output_dir.join(&file_name), content)?;
        Ok(file_name)
    }
}
