//! Interactive session: the terminal counterpart of the single-page deck.
//!
//! Cards and the candidate slot are redrawn from `DeckEvent`s, notices are
//! printed after each command. No error ends the session; a failed command
//! prints its error and the prompt comes back.

use crate::print::{print_candidate, print_cards, print_messages};
use colored::Colorize;
use log::debug;
use pokedeck::api::{CmdMessage, DeckApi, DeckEvent};
use pokedeck::commands::CmdResult;
use pokedeck::error::{DeckError, Result};
use pokedeck::lookup::LookupService;
use pokedeck::model::CreatureId;
use pokedeck::store::KeyValueStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "pokedeck> ";

const HELP: &str = "\
search <id|name>   look up a candidate (alias: s)
add [<id|name>]    save the candidate, or search and save (alias: a)
show | hide        reveal or mask every speed
toggle <id>        flip one card's speed (alias: t, or just the id)
remove <id>...     delete cards (alias: rm)
list               print the cards again (alias: ls)
refresh            fetch every card again
help               this text
quit               leave (alias: q, Ctrl-D)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Confirm,
    Add(String),
    Show,
    Hide,
    Toggle(CreatureId),
    Remove(Vec<CreatureId>),
    List,
    Refresh,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "add" | "a" if rest.is_empty() => Ok(Self::Confirm),
            "add" | "a" => Ok(Self::Add(rest.to_string())),
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "toggle" | "t" => rest.parse().map(Self::Toggle),
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err("remove needs at least one id".to_string());
                }
                rest.split_whitespace()
                    .map(str::parse)
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map(Self::Remove)
            }
            "list" | "ls" => Ok(Self::List),
            "refresh" | "r" => Ok(Self::Refresh),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => match line.parse::<CreatureId>() {
                Ok(id) => Ok(Self::Toggle(id)),
                Err(_) => Err(format!("Unknown command: {} (try `help`)", word)),
            },
        }
    }
}

pub async fn run<S: KeyValueStore, L: LookupService>(api: &mut DeckApi<S, L>) -> Result<()> {
    api.subscribe(|event| match event {
        DeckEvent::DisplayChanged(records) => print_cards(records),
        DeckEvent::CandidateChanged(candidate) => print_candidate(candidate.as_ref()),
        DeckEvent::CollectionChanged(_) => {}
    });

    let mut editor = DefaultEditor::new().map_err(|e| DeckError::Api(e.to_string()))?;
    println!("{}", "Type `help` for commands.".dimmed());

    match api.refresh().await {
        Ok(result) => print_messages(&result.messages),
        Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
    }

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(DeckError::Api(format!("readline failed: {}", e))),
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Err(e) = editor.add_history_entry(line.trim()) {
            debug!("could not record history: {}", e);
        }

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                print_messages(&[CmdMessage::error(msg)]);
                continue;
            }
        };

        let outcome: Result<CmdResult> = match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::List => {
                print_cards(api.records());
                print_candidate(api.candidate());
                continue;
            }
            ShellCommand::Search(query) => api.search(&query).await,
            ShellCommand::Confirm => api.confirm().await,
            ShellCommand::Add(query) => api.add(&query).await,
            ShellCommand::Show => Ok(api.show_all()),
            ShellCommand::Hide => Ok(api.hide_all()),
            ShellCommand::Toggle(id) => Ok(api.toggle(id)),
            ShellCommand::Remove(ids) => api.remove(&ids).await,
            ShellCommand::Refresh => api.refresh().await,
        };

        match outcome {
            Ok(result) => print_messages(&result.messages),
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> CreatureId {
        CreatureId::new(n).unwrap()
    }

    #[test]
    fn parses_search_with_spaces() {
        assert_eq!(
            ShellCommand::parse("search  Mr-Mime "),
            Ok(ShellCommand::Search("Mr-Mime".into()))
        );
        assert_eq!(ShellCommand::parse("s"), Ok(ShellCommand::Search(String::new())));
    }

    #[test]
    fn add_without_query_confirms() {
        assert_eq!(ShellCommand::parse("add"), Ok(ShellCommand::Confirm));
        assert_eq!(ShellCommand::parse("A 25"), Ok(ShellCommand::Add("25".into())));
    }

    #[test]
    fn bare_id_toggles() {
        assert_eq!(ShellCommand::parse("25"), Ok(ShellCommand::Toggle(id(25))));
        assert_eq!(ShellCommand::parse("t #4"), Ok(ShellCommand::Toggle(id(4))));
    }

    #[test]
    fn remove_takes_many_ids() {
        assert_eq!(
            ShellCommand::parse("rm 1 2 3"),
            Ok(ShellCommand::Remove(vec![id(1), id(2), id(3)]))
        );
        assert!(ShellCommand::parse("rm").is_err());
        assert!(ShellCommand::parse("rm 1 bulbasaur").is_err());
    }

    #[test]
    fn unknown_word_is_an_error() {
        assert!(ShellCommand::parse("dance").is_err());
        assert!(ShellCommand::parse("toggle").is_err());
    }

    #[test]
    fn quit_aliases() {
        for word in ["quit", "exit", "q", "QUIT"] {
            assert_eq!(ShellCommand::parse(word), Ok(ShellCommand::Quit));
        }
    }
}
