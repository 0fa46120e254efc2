//! appdock CLI - Main entry point

mod apps;
mod commands;

use appdock_foundation::JsonStore;
use clap::{Parser, Subcommand};
use commands::Added;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// appdock - collision-safe application registration
#[derive(Parser, Debug)]
#[command(name = "appdock")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Add an application (package name, local path or URL) as a disabled entry
    Add {
        /// Application identifier
        identifier: String,
    },
    /// Register all enabled applications (default)
    Setup,
    /// List configured applications
    List,
    /// Register applications and run one of their CLI commands
    Exec {
        /// Command name followed by its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// 알 수 없는 첫 단어는 setup으로 처리
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let store = JsonStore::current_project()?;

    // 에러는 로그로만 보고
    if let Err(e) = run(args.command.unwrap_or(Command::Setup), store).await {
        error!("{:#}", e);
    }
    Ok(())
}

async fn run(command: Command, store: JsonStore) -> anyhow::Result<()> {
    match command {
        Command::Add { identifier } => match commands::add_app(&store, &identifier)? {
            Added::New(name) => {
                println!(
                    "✅ Added {} to configuration. Run \"appdock setup\" to complete installation.",
                    name
                );
            }
            Added::Existing(name) => {
                println!("{} is already configured.", name);
            }
        },
        Command::Setup | Command::Other(_) => {
            let report = commands::setup(store).await?;
            if report.is_clean() {
                println!("✅ All configured applications registered");
            } else {
                println!(
                    "⚠️  Registered {} applications, {} rejected, {} failed",
                    report.registered.len(),
                    report.conflicts.len(),
                    report.failures.len()
                );
            }
        }
        Command::List => {
            let listed = commands::list_apps(&store)?;
            if listed.is_empty() {
                println!("No applications configured. Add one with \"appdock add <identifier>\".");
            }
            for (name, enabled) in listed {
                let mark = if enabled { "✓" } else { " " };
                println!("[{}] {}", mark, name);
            }
        }
        Command::Exec { args } => {
            let result = commands::exec(store, &args).await?;
            for line in &result.content {
                println!("{}", line);
            }
            if let Some(message) = &result.error {
                anyhow::bail!("{}", message);
            }
        }
    }
    Ok(())
}
