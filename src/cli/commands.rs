use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::filters::{apply_filters, parse_filter};
use crate::models::{Message, SearchResult};
use crate::parsers::parse_message_file;
use crate::search::{DEFAULT_MAX_LENGTH, SearchOptions, search_with};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Parser)]
#[command(name = "chat-message-search")]
#[command(version = "0.1.0")]
#[command(about = "Search messages in a chat conversation transcript", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a conversation for a case-insensitive substring
    Search {
        /// Conversation transcript (JSONL, one message per line)
        file: PathBuf,
        /// Text to look for
        query: String,
        /// Filter expression, e.g. "kind:user since:2024-01-01"
        #[arg(short, long)]
        filter: Option<String>,
        /// Snippet length in characters
        #[arg(long, env = "CHAT_SEARCH_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: usize,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show statistics about a conversation
    Stats {
        /// Conversation transcript (JSONL, one message per line)
        file: PathBuf,
    },
}

/// JSON view of a search result; offsets are -1 when the match couldn't be placed
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    id: &'a str,
    created_at: DateTime<Utc>,
    kind: &'static str,
    snippet: &'a str,
    match_start: i64,
    match_end: i64,
}

impl<'a> From<&'a SearchResult<'a>> for JsonHit<'a> {
    fn from(result: &'a SearchResult<'a>) -> Self {
        Self {
            id: &result.message.id,
            created_at: result.message.created_at,
            kind: result.message.kind.label(),
            snippet: &result.snippet,
            match_start: result.match_start(),
            match_end: result.match_end(),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Search { file, query, filter, max_length, json }) => {
            run_search(file, query, filter.as_deref(), *max_length, *json)?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(file)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_search(
    file: &Path,
    query: &str,
    filter: Option<&str>,
    max_length: usize,
    json: bool,
) -> Result<()> {
    let filter = parse_filter(filter.unwrap_or_default()).context("Invalid --filter expression")?;
    let messages = parse_message_file(file)?;
    let candidates = apply_filters(&messages, &filter);

    let options = SearchOptions { max_snippet_length: max_length };
    let results = search_with(candidates, query, &options);

    if json {
        let hits: Vec<JsonHit> = results.iter().map(JsonHit::from).collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches");
        return Ok(());
    }

    for result in &results {
        println!(
            "[{}] {} {}: {}",
            result.message.id,
            result.message.created_at.format(TIMESTAMP_FORMAT),
            result.message.kind.label(),
            mark_highlight(&result.snippet, result.highlight.as_ref())
        );
    }
    println!();
    println!("{} of {} messages matched", results.len(), messages.len());

    Ok(())
}

/// Wrap the highlighted char range in `[[` `]]`
fn mark_highlight(snippet: &str, highlight: Option<&Range<usize>>) -> String {
    let Some(range) = highlight else {
        return snippet.to_string();
    };

    let mut marked = String::with_capacity(snippet.len() + 4);
    for (i, ch) in snippet.chars().enumerate() {
        if i == range.start {
            marked.push_str("[[");
        }
        marked.push(ch);
        if i + 1 == range.end {
            marked.push_str("]]");
        }
    }
    marked
}

fn show_stats(file: &Path) -> Result<()> {
    let messages = parse_message_file(file)?;

    let count = |label: &str| messages.iter().filter(|m| m.kind.label() == label).count();

    println!("Conversation Statistics");
    println!("=======================");
    println!("Total messages: {}", messages.len());
    println!("  User: {}", count("user"));
    println!("  Assistant: {}", count("assistant"));
    println!("  Tool calls: {}", count("tool"));
    println!("  Events: {}", count("event"));
    println!("  Unknown: {}", count("unknown"));

    if let Some(oldest) = messages.iter().map(|m: &Message| m.created_at).min() {
        println!("Oldest message: {}", oldest.format(TIMESTAMP_FORMAT));
    }
    if let Some(newest) = messages.iter().map(|m| m.created_at).max() {
        println!("Newest message: {}", newest.format(TIMESTAMP_FORMAT));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_highlight() {
        assert_eq!(mark_highlight("a fox here", Some(&(2..5))), "a [[fox]] here");
        assert_eq!(mark_highlight("fox", Some(&(0..3))), "[[fox]]");
    }

    #[test]
    fn test_mark_highlight_multibyte() {
        assert_eq!(mark_highlight("...é fox", Some(&(5..8))), "...é [[fox]]");
    }

    #[test]
    fn test_mark_highlight_none() {
        assert_eq!(mark_highlight("plain", None), "plain");
    }

    #[test]
    fn test_cli_parses_search_arguments() {
        let cli = Cli::try_parse_from([
            "chat-message-search",
            "search",
            "chat.jsonl",
            "fox",
            "--filter",
            "kind:user",
            "--max-length",
            "40",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Search { file, query, filter, max_length, json }) => {
                assert_eq!(file, PathBuf::from("chat.jsonl"));
                assert_eq!(query, "fox");
                assert_eq!(filter.as_deref(), Some("kind:user"));
                assert_eq!(max_length, 40);
                assert!(json);
            }
            _ => panic!("expected search command"),
        }
    }
}
