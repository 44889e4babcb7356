use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobflow::{AppError, InitOptions, LogOptions, LogView, RunOptions};

#[derive(Parser)]
#[command(name = "jobflow")]
#[command(version)]
#[command(
    about = "Automate CV-based job discovery, resume tailoring, and application tracking",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold jobflow.toml and a sample master resume in the current directory
    #[clap(visible_alias = "i")]
    Init {
        /// Applicant name for the cover letter signature
        #[arg(long)]
        name: Option<String>,
        /// Contact line for the cover letter signature
        #[arg(long)]
        contact: Option<String>,
        /// LinkedIn URL for the cover letter signature
        #[arg(long)]
        linkedin: Option<String>,
    },
    /// Run the application workflow over the configured job boards
    #[clap(visible_alias = "r")]
    Run {
        /// Config file (defaults to ./jobflow.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Master resume path override
        #[arg(long)]
        resume: Option<PathBuf>,
        /// Search location override
        #[arg(short, long)]
        location: Option<String>,
        /// Directory for tailored resumes and cover letters
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Application log path override
        #[arg(long)]
        log_file: Option<PathBuf>,
        /// Discover and list jobs without writing any files
        #[arg(long)]
        dry_run: bool,
    },
    /// Show tracked applications from the log
    #[clap(visible_alias = "l")]
    Log {
        /// Config file (defaults to ./jobflow.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Application log path override
        #[arg(long)]
        log_file: Option<PathBuf>,
        /// Only entries whose follow-up date has arrived
        #[arg(long)]
        due: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init {
            name,
            contact,
            linkedin,
        } => jobflow::init(InitOptions {
            name,
            contact,
            linkedin,
            interactive: std::io::stdin().is_terminal(),
        })
        .map(|_| ()),
        Commands::Run {
            config,
            resume,
            location,
            output_dir,
            log_file,
            dry_run,
        } => jobflow::run(RunOptions {
            config,
            resume,
            location,
            output_dir,
            log_file,
            dry_run,
        })
        .map(|_| ()),
        Commands::Log {
            config,
            log_file,
            due,
        } => jobflow::log_entries(LogOptions {
            config,
            log_file,
            due,
        })
        .map(print_log_view),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_log_view(view: LogView) {
    if view.entries.is_empty() {
        println!("No applications to show ({} tracked).", view.total);
        return;
    }

    for entry in &view.entries {
        println!(
            "{}  {} - {} via {}  [{}]  follow up {}",
            entry.date, entry.company, entry.role, entry.site, entry.status, entry.follow_up_date
        );
    }
    println!(
        "{} of {} tracked applications shown.",
        view.entries.len(),
        view.total
    );
}
