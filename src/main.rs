use activity_board::{Config, Outcome, synchronizer, ui};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, process::ExitCode};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "activity_board", about = "Browse and manage activity sign-ups")]
struct Cli {
    /// Activities service address; overrides ACTIVITIES_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every activity with its participants.
    List,
    /// Write the activities page as HTML.
    Render {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sign up an email for an activity.
    Signup { activity: String, email: String },
    /// Remove an email from an activity.
    Remove { activity: String, email: String },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    info!("using activities service at {}", config.base_url);
    let mut sync = synchronizer(&config)?;
    let loaded = sync.load_activities().await;

    let outcome = match cli.command {
        Command::List => {
            print!("{}", ui::render_text(sync.view()));
            loaded
        }
        Command::Render { out } => {
            let page = ui::render_page(sync.view());
            match out {
                Some(path) => {
                    fs::write(&path, page).await?;
                    info!("wrote {}", path.display());
                }
                None => print!("{page}"),
            }
            loaded
        }
        Command::Signup { activity, email } => {
            let outcome = sync.signup(&activity, &email).await;
            print!("{}", ui::render_text(sync.view()));
            outcome
        }
        Command::Remove { activity, email } => {
            let outcome = sync.remove_participant(&activity, &email).await;
            print!("{}", ui::render_text(sync.view()));
            outcome
        }
    };

    Ok(match outcome {
        Outcome::Applied => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
