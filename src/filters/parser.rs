//! Filter expression parser for narrowing a conversation before searching.
//!
//! # Syntax
//!
//! ```text
//! filter_expr  := field_filter (operator? field_filter)*
//! field_filter := field_name:value | field_name:"quoted value"
//! operator     := AND | OR (case-insensitive)
//! field_name   := kind | since | until (case-insensitive)
//! ```
//!
//! # Supported Fields
//!
//! - `kind:user|assistant|tool|event|unknown` - Message kind
//! - `since:YYYY-MM-DD` - Created on or after the date (UTC)
//! - `until:YYYY-MM-DD` - Created before the date (UTC)
//!
//! Without an explicit operator, terms on the same field are OR'd and terms on
//! different fields are AND'd.
//!
//! # Examples
//!
//! ```rust
//! # use chat_message_search::filters::parser::parse_filter;
//! let expr = parse_filter("kind:user").unwrap();
//! let expr = parse_filter("kind:user kind:assistant since:2024-01-01").unwrap();
//! let expr = parse_filter("kind:tool OR kind:event").unwrap();
//! ```

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};

const KIND_VALUES: [&str; 5] = ["user", "assistant", "tool", "event", "unknown"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    /// field:value or field:"quoted value"
    FieldValue { field: String, value: String },
    And,
    Or,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);

        match word.to_uppercase().as_str() {
            "AND" => tokens.push(Token::And),
            "OR" => tokens.push(Token::Or),
            _ => {
                let Some((field, value)) = word.split_once(':') else {
                    return Err(anyhow!(
                        "Invalid token: '{}' (expected field:value or AND/OR)",
                        word
                    ));
                };

                let value = if value.starts_with('"') {
                    read_quoted_value(&mut chars, value)?
                } else {
                    value.to_string()
                };

                if field.is_empty() || value.is_empty() {
                    return Err(anyhow!("Invalid field:value format: {}", word));
                }

                tokens.push(Token::FieldValue { field: field.to_string(), value });
            }
        }
    }

    Ok(tokens)
}

/// Read a word (until whitespace or end)
fn read_word(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut word = String::new();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }

    word
}

/// Read a quoted value; `initial` is the part already consumed, starting with the opening quote
fn read_quoted_value(
    chars: &mut std::iter::Peekable<std::str::Chars>,
    initial: &str,
) -> Result<String> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        value.truncate(quote_pos);
        return Ok(value);
    }

    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

fn parse_field(field: &str) -> Result<FilterField> {
    match field.to_lowercase().as_str() {
        "kind" => Ok(FilterField::Kind),
        "since" => Ok(FilterField::Since),
        "until" => Ok(FilterField::Until),
        _ => Err(anyhow!("Unknown field: '{}' (valid fields: kind, since, until)", field)),
    }
}

/// Parse filter string into FilterExpr
///
/// An empty or whitespace-only input yields an empty expression that keeps every message.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    let mut expr = FilterExpr::new();
    let mut expecting_filter = true;
    let mut last_field: Option<FilterField> = None;

    for token in tokens {
        match token {
            Token::FieldValue { field, value } => {
                let filter_field = parse_field(&field)?;
                validate_value(&filter_field, &value)?;

                // No explicit operator since the previous term
                if !expecting_filter {
                    let implicit_op = if last_field.as_ref() == Some(&filter_field) {
                        FilterOperator::Or
                    } else {
                        FilterOperator::And
                    };
                    expr.add_operator(implicit_op);
                }

                expr.add_filter(FieldFilter::new(filter_field.clone(), value));
                last_field = Some(filter_field);
                expecting_filter = false;
            }
            Token::And => {
                if expecting_filter {
                    return Err(anyhow!("Unexpected AND operator (expected field:value)"));
                }
                expr.add_operator(FilterOperator::And);
                expecting_filter = true;
            }
            Token::Or => {
                if expecting_filter {
                    return Err(anyhow!("Unexpected OR operator (expected field:value)"));
                }
                expr.add_operator(FilterOperator::Or);
                expecting_filter = true;
            }
        }
    }

    if expecting_filter && !expr.is_empty() {
        return Err(anyhow!("Filter ended with operator (expected field:value)"));
    }

    Ok(expr)
}

fn validate_value(field: &FilterField, value: &str) -> Result<()> {
    match field {
        FilterField::Kind => {
            let lower = value.to_lowercase();
            if KIND_VALUES.contains(&lower.as_str()) {
                Ok(())
            } else {
                Err(anyhow!(
                    "Invalid kind value: '{}' (must be one of {})",
                    value,
                    KIND_VALUES.join(", ")
                ))
            }
        }
        FilterField::Since | FilterField::Until => {
            if !is_valid_date_format(value) {
                return Err(anyhow!("Invalid date format: '{}' (expected YYYY-MM-DD)", value));
            }
            Ok(())
        }
    }
}

/// Check if string is valid YYYY-MM-DD format
fn is_valid_date_format(s: &str) -> bool {
    // chrono accepts unpadded fields, so enforce the width first
    s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}
