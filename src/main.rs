use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parking_lot::Mutex;

use reelstate::catalog::Catalog;
use reelstate::config::Config;
use reelstate::logging::init_tracing;
use reelstate::pipeline::OrderingPolicy;
use reelstate::video::VideoState;
use reelstate::workflow::VideoPlayer;

#[derive(Parser, Debug)]
#[command(name = "reelstate", version, about = "Drive the video loading workflow")]
struct Cli {
    /// Config file (default: ~/.config/reelstate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load one or more videos and print every state transition
    Load {
        /// Video identifiers, e.g. /video/1
        #[arg(required = true)]
        ids: Vec<String>,

        /// Print states as JSON lines
        #[arg(long)]
        json: bool,

        /// Dispatch all loads at once instead of waiting for each
        #[arg(long)]
        back_to_back: bool,

        /// Override the catalog latency in milliseconds
        #[arg(long)]
        latency_ms: Option<u64>,

        /// Let every overlapping load finish instead of keeping only the latest
        #[arg(long)]
        unordered: bool,
    },
    /// List the identifiers the catalog knows
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    match cli.command {
        Command::Catalog => {
            let catalog = Catalog::from_config(&config);
            for id in catalog.ids() {
                if let Some(video) = catalog.get(id) {
                    println!("{}\t{}\t{}", id, video.title, video.source);
                }
            }
        }
        Command::Load {
            ids,
            json,
            back_to_back,
            latency_ms,
            unordered,
        } => {
            if let Some(ms) = latency_ms {
                config.catalog.latency_ms = ms;
            }
            if unordered {
                config.player.ordering = OrderingPolicy::Unordered;
            }
            run_loads(&config, &ids, json, back_to_back).await?;
        }
    }

    Ok(())
}

async fn run_loads(config: &Config, ids: &[String], json: bool, back_to_back: bool) -> Result<()> {
    let player = VideoPlayer::new(config, tokio::runtime::Handle::current());
    print_state(&player.state(), json)?;

    // Subscribers cannot return errors; remember the first one for later.
    let print_error: Arc<Mutex<Option<anyhow::Error>>> = Arc::new(Mutex::new(None));
    let reader = player.downgrade();
    let sink = Arc::clone(&print_error);
    let _subscription = player.subscribe(move || {
        let Some(state) = reader.get_state() else {
            return;
        };
        if let Err(err) = print_state(&state, json) {
            sink.lock().get_or_insert(err);
        }
    });

    for id in ids {
        player.load(id);
        if !back_to_back {
            player.settled().await;
        }
    }
    player.settled().await;

    let first_error = print_error.lock().take();
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn print_state(state: &VideoState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(state).context("encoding state")?);
        return Ok(());
    }

    let video = state
        .visible_video()
        .map(|v| format!("{} ({})", v.title, v.source))
        .unwrap_or_else(|| "-".to_string());
    let error = state.error_message.as_deref().unwrap_or("-");
    println!("{:?}\tvideo: {}\terror: {}", state.phase(), video, error);
    Ok(())
}
