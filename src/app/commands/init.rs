//! Workspace scaffolding.

use std::fs;
use std::path::Path;

use dialoguer::Input;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, CONFIG_FILE, Profile};
use crate::services::EmbeddedScaffold;

/// Profile values for the scaffolded config. Fields left as `None` are
/// prompted for when `interactive` is set, and fall back to placeholders
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub linkedin: Option<String>,
    /// Whether missing fields may be prompted for on stdin. The binary sets
    /// this from a terminal check.
    pub interactive: bool,
}

/// Files the scaffold created or deliberately left alone.
#[derive(Debug, Clone, Default)]
pub struct InitOutcome {
    pub created: Vec<String>,
    pub preserved: Vec<String>,
}

/// Execute the init command in `root`.
///
/// Refuses to run when `jobflow.toml` is already present; any other
/// existing file is preserved rather than overwritten.
pub fn execute(root: &Path, options: &InitOptions) -> Result<InitOutcome, AppError> {
    if root.join(CONFIG_FILE).exists() {
        return Err(AppError::AlreadyInitialized);
    }

    let profile = resolve_profile(options)?;
    let scaffold = EmbeddedScaffold::new();

    let mut outcome = InitOutcome::default();
    for file in scaffold.files() {
        let target = root.join(&file.path);
        if target.exists() {
            outcome.preserved.push(file.path);
            continue;
        }

        let content = render_scaffold(&file.content, &file.path, &profile)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        outcome.created.push(file.path);
    }

    Ok(outcome)
}

/// Fill profile fields from options, prompting for anything missing in
/// interactive mode and falling back to placeholders otherwise.
fn resolve_profile(options: &InitOptions) -> Result<Profile, AppError> {
    let defaults = Profile::default();
    Ok(Profile {
        name: resolve_field(
            options.name.as_deref(),
            options.interactive,
            "Applicant name",
            &defaults.name,
        )?,
        contact: resolve_field(
            options.contact.as_deref(),
            options.interactive,
            "Contact (email or phone)",
            &defaults.contact,
        )?,
        linkedin: resolve_field(
            options.linkedin.as_deref(),
            options.interactive,
            "LinkedIn profile URL",
            &defaults.linkedin,
        )?,
    })
}

fn resolve_field(
    value: Option<&str>,
    interactive: bool,
    prompt: &str,
    fallback: &str,
) -> Result<String, AppError> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }

    if interactive {
        return Input::new()
            .with_prompt(prompt)
            .default(fallback.to_string())
            .interact_text()
            .map_err(|e| AppError::config_error(format!("{prompt} prompt failed: {e}")));
    }

    Ok(fallback.to_string())
}

/// Render one scaffold file. Profile placeholders are substituted; files
/// without placeholders pass through unchanged.
fn render_scaffold(content: &str, path: &str, profile: &Profile) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(
        content,
        context! {
            name => profile.name,
            contact => profile.contact,
            linkedin => profile.linkedin,
        },
    )
    .map_err(|err| AppError::Template(format!("scaffold {path}: {err}")))
}
