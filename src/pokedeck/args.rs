use clap::{Parser, Subcommand};
use pokedeck::model::CreatureId;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (build ",
    env!("POKEDECK_BUILD"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "pokedeck", version, long_version = LONG_VERSION)]
#[command(about = "Collect PokéAPI creatures as cards in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the saved cards
    #[command(alias = "ls")]
    List {
        /// Reveal the speed on every card
        #[arg(long)]
        show: bool,
    },

    /// Look up a creature without saving it
    #[command(alias = "s")]
    Search {
        /// Id or name (case-insensitive)
        query: String,
    },

    /// Look up a creature and save it to the deck
    #[command(alias = "a")]
    Add {
        /// Id or name (case-insensitive)
        query: String,
    },

    /// Remove one or more cards
    #[command(alias = "rm")]
    Remove {
        /// Ids of the cards (e.g. 25 4 7)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<CreatureId>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, concurrency, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive session with a candidate slot and per-card toggles
    Shell,
}
