//! CLI frontend for Focus-Block-Flow Lenormand readings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::StoreOptions;

#[derive(Parser)]
#[command(
    name = "fbf",
    about = "Three-card Lenormand readings: Focus, Block, Flow",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the reading journal
    #[arg(long, global = true, env = "FBF_JOURNAL_DIR", default_value = ".fbf")]
    journal_dir: PathBuf,

    /// Keep the journal in memory only (nothing is read or written)
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the reading topics
    Topics,

    /// List the cards in the deck
    Deck,

    /// Look up the meaning of a card in a position for a topic
    Meaning {
        /// Topic (health, money, relationships, spirituality)
        topic: String,

        /// Position (focus, block, flow, or 1-3)
        position: String,

        /// Card name (e.g. Rider, Fox)
        card: String,
    },

    /// Draw a Focus-Block-Flow spread and record it in the journal
    Draw {
        /// Topic (health, money, relationships, spirituality)
        #[arg(short, long)]
        topic: Option<String>,

        /// RNG seed for a reproducible draw
        #[arg(short, long, env = "FBF_SEED")]
        seed: Option<u64>,

        /// Print the cards face down
        #[arg(long)]
        hidden: bool,

        /// The question to ask
        question: Vec<String>,
    },

    /// Show recent journal entries, newest first
    Journal {
        /// Maximum number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Only show readings for this topic
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Export the journal
    Export {
        /// Output format: markdown, text, json
        #[arg(default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start an interactive reading session
    Session {
        /// RNG seed for reproducible draws
        #[arg(short, long, env = "FBF_SEED")]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = StoreOptions {
        journal_dir: cli.journal_dir,
        ephemeral: cli.ephemeral,
    };

    let result = match cli.command {
        Commands::Topics => commands::topics::run(),
        Commands::Deck => commands::deck::run(),
        Commands::Meaning {
            topic,
            position,
            card,
        } => commands::meaning::run(&topic, &position, &card),
        Commands::Draw {
            topic,
            seed,
            hidden,
            question,
        } => commands::draw::run(&store, topic.as_deref(), &question.join(" "), seed, hidden),
        Commands::Journal { limit, topic } => {
            commands::journal::run(&store, limit, topic.as_deref())
        }
        Commands::Export { format, output } => {
            commands::export::run(&store, &format, output.as_deref())
        }
        Commands::Session { seed } => commands::session::run(&store, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
