use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod comments;
mod config;
mod manifest;

use comments::{PackageEvent, notifier, report};

/// Environment variable holding the log filter (e.g. `debug`).
const LOG_ENV: &str = "COMPOSER_COMMENTS_LOG";

#[derive(Parser)]
#[command(
    name = "composer-comments",
    version,
    about = "Display custom comments on packages declared in composer.json"
)]
struct Cli {
    /// Project directory containing the manifest
    #[arg(short = 'd', long, global = true, default_value = ".")]
    working_dir: PathBuf,
    /// Manifest file to read (overrides COMPOSER; defaults to composer.json)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the comments found in the manifest.
    ///
    /// Comments say what a package is used for or why it is held at a
    /// certain version: information that is not obvious from the manifest.
    Comments {
        /// Package to display the comment of. If omitted, all comments are displayed
        package: Option<String>,
    },
    /// Print the comment for one completed package operation, if it has one
    Notify {
        #[command(subcommand)]
        event: EventArgs,
    },
    /// Read package events as JSON lines from stdin and print their comments
    Hook,
}

#[derive(Subcommand)]
enum EventArgs {
    /// A package was installed
    Install { package: String },
    /// A package was updated; the comment of the target package is shown
    Update { initial: String, target: String },
    /// A package was uninstalled
    Uninstall { package: String },
}

impl From<EventArgs> for PackageEvent {
    fn from(args: EventArgs) -> Self {
        match args {
            EventArgs::Install { package } => PackageEvent::Install { package },
            EventArgs::Update { initial, target } => PackageEvent::Update { initial, target },
            EventArgs::Uninstall { package } => PackageEvent::Uninstall { package },
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = config::load_config(&cli.working_dir, cli.manifest.as_deref())?;
    tracing::debug!(
        working_dir = %config.working_dir.display(),
        manifest = %config.manifest.display(),
        "resolved manifest"
    );
    let store = comments::load_store(&config)?;

    match cli.command {
        Commands::Comments { package: Some(package) } => {
            println!("{}", report::report_one(&store, &package)?);
        }
        Commands::Comments { package: None } => {
            let lines = report::report_all(&store);
            let mut lines = lines.iter();
            if let Some(first) = lines.next() {
                println!("{first}");
            }
            for line in lines {
                println!("  {line}");
            }
        }
        Commands::Notify { event } => {
            let event = PackageEvent::from(event);
            if let Some(notice) = notifier::on_package_event(&event, &store) {
                println!("{}{notice}", notifier::NOTICE_INDENT);
            }
        }
        Commands::Hook => {
            let stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout().lock();
            let written = notifier::notify_stream(stdin, &store, &mut stdout)?;
            stdout.flush()?;
            tracing::debug!(notices = written, "processed package events");
        }
    }

    Ok(())
}
