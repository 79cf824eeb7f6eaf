use clap::Parser;
use directories::ProjectDirs;
use log::warn;
use pokedeck::api::DeckApi;
use pokedeck::commands::config::ConfigAction;
use pokedeck::commands::DeckPaths;
use pokedeck::config::DeckConfig;
use pokedeck::error::{DeckError, Result};
use pokedeck::lookup::pokeapi::PokeApiClient;
use pokedeck::model::CreatureId;
use pokedeck::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;
mod shell;
use args::{Cli, Commands};
use print::{print_candidate, print_cards, print_config, print_messages};

/// Overrides the platform data directory (used by tests).
const HOME_ENV: &str = "POKEDECK_HOME";

type Api = DeckApi<FileStore, PokeApiClient>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut api = init_api()?;

    match cli.command {
        Some(Commands::List { show }) => handle_list(&mut api, show).await,
        Some(Commands::Search { query }) => handle_search(&mut api, &query).await,
        Some(Commands::Add { query }) => handle_add(&mut api, &query).await,
        Some(Commands::Remove { ids }) => handle_remove(&mut api, &ids).await,
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value),
        Some(Commands::Shell) => shell::run(&mut api).await,
        None => handle_list(&mut api, false).await,
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "pokedeck=debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(verbose)),
    )
    .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pokedeck", "pokedeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeckError::Config("Could not determine data directory".to_string()))
}

fn init_api() -> Result<Api> {
    let data_dir = data_dir()?;
    let config = DeckConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {}", e);
        DeckConfig::default()
    });

    let lookup = PokeApiClient::from_config(&config)?;
    let store = FileStore::new(data_dir.clone());
    let paths = DeckPaths { data_dir };
    Ok(DeckApi::new(store, lookup, config, paths))
}

async fn handle_list(api: &mut Api, show: bool) -> Result<()> {
    let mut result = api.refresh().await?;
    if show {
        result = result.merge(api.show_all());
    }
    print_cards(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

async fn handle_search(api: &mut Api, query: &str) -> Result<()> {
    let result = api.search(query).await?;
    print_messages(&result.messages);
    if result.candidate.is_some() {
        print_candidate(result.candidate.as_ref());
    }
    Ok(())
}

async fn handle_add(api: &mut Api, query: &str) -> Result<()> {
    let result = api.add(query).await?;
    print_messages(&result.messages);
    Ok(())
}

async fn handle_remove(api: &mut Api, ids: &[CreatureId]) -> Result<()> {
    let result = api.remove(ids).await?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &mut Api, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.configure(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_warn() {
        assert_eq!(default_log_filter(false), "warn");
        assert_eq!(default_log_filter(true), "pokedeck=debug");
    }
}
