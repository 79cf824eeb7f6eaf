use colored::Colorize;
use pokedeck::api::{CmdMessage, MessageLevel};
use pokedeck::config::{DeckConfig, CONFIG_KEYS};
use pokedeck::model::{Candidate, DisplayRecord};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 16;
const HIDDEN_MARKER: &str = "-";
const UNKNOWN_MARKER: &str = "?";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_cards(records: &[DisplayRecord]) {
    if records.is_empty() {
        println!("{}", "No cards in the deck.".dimmed());
        return;
    }

    for record in records {
        let id = format!("#{:<5}", record.id.get());
        let name = pad_to_width(&truncate_to_width(&record.name, NAME_WIDTH), NAME_WIDTH);
        let speed = format!("S: {:<4}", speed_label(record));
        let speed = if record.revealed {
            speed.cyan()
        } else {
            speed.dimmed()
        };
        let image = record.image_url.as_deref().unwrap_or("");

        println!("  {} {} {} {}", id.yellow(), name.bold(), speed, image.dimmed());
    }
}

pub(crate) fn print_candidate(candidate: Option<&Candidate>) {
    match candidate {
        Some(c) => println!(
            "{} #{} {} {}",
            "Candidate:".bold(),
            c.id,
            c.name,
            c.image_url.as_deref().unwrap_or("").dimmed()
        ),
        None => println!("{}", "No candidate".dimmed()),
    }
}

pub(crate) fn print_config(config: &DeckConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Speed as shown on a card: masked until revealed, `?` when the API gave
/// no speed stat.
pub(crate) fn speed_label(record: &DisplayRecord) -> String {
    match (record.revealed, record.speed) {
        (false, _) => HIDDEN_MARKER.to_string(),
        (true, Some(speed)) => speed.to_string(),
        (true, None) => UNKNOWN_MARKER.to_string(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
