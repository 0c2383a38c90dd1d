use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::Message;
use crate::utils::safe_open_file;

const MAX_CONSECUTIVE_ERRORS: usize = 100;

/// Parse a conversation JSONL file into messages, in file order
/// Gracefully handles malformed lines by logging and skipping them
/// Returns an error if more than 50% of lines fail to parse or >100 consecutive errors
pub fn parse_message_file(path: &Path) -> Result<Vec<Message>> {
    let file = safe_open_file(path)?;
    parse_messages(BufReader::new(file), &path.display().to_string())
}

/// Parse JSONL messages from any buffered reader
///
/// `source` names the input in warnings and errors.
pub fn parse_messages<R: BufRead>(reader: R, source: &str) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    let mut skipped_count = 0;
    let mut total_lines = 0;
    let mut consecutive_errors = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line from {}", source))?;

        if line.trim().is_empty() {
            continue;
        }

        total_lines += 1;

        match serde_json::from_str::<Message>(&line) {
            Ok(message) => {
                messages.push(message);
                consecutive_errors = 0;
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse line {} in {}: {}", line_num + 1, source, e);
                skipped_count += 1;
                consecutive_errors += 1;

                if consecutive_errors >= MAX_CONSECUTIVE_ERRORS {
                    bail!(
                        "Too many consecutive parse errors ({}) in {} - file may be corrupted",
                        consecutive_errors,
                        source
                    );
                }
            }
        }
    }

    if total_lines > 0 {
        let failure_rate = (skipped_count as f64) / (total_lines as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many parse failures in {}: {} of {} lines failed ({:.1}%)",
                source,
                skipped_count,
                total_lines,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        eprintln!("Parsed {}: {} messages ({} skipped)", source, messages.len(), skipped_count);
    }

    Ok(messages)
}
