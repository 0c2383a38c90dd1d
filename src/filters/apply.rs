use chrono::{DateTime, NaiveDate, Utc};

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
use crate::models::Message;

/// Keep the messages matching `filter`, preserving their order
///
/// An empty expression keeps everything. Operators are applied left to right
/// with no precedence between AND and OR.
pub fn apply_filters<'a>(messages: &'a [Message], filter: &FilterExpr) -> Vec<&'a Message> {
    messages.iter().filter(|message| evaluate_filter(message, filter)).collect()
}

/// Evaluate filter expression against a single message
fn evaluate_filter(message: &Message, filter: &FilterExpr) -> bool {
    let Some(first) = filter.filters.first() else {
        return true;
    };

    let mut result = evaluate_field_filter(message, first);

    for (operator, next) in filter.operators.iter().zip(&filter.filters[1..]) {
        let next_result = evaluate_field_filter(message, next);

        result = match operator {
            FilterOperator::And => result && next_result,
            FilterOperator::Or => result || next_result,
        };
    }

    result
}

fn evaluate_field_filter(message: &Message, filter: &FieldFilter) -> bool {
    match filter.field {
        FilterField::Kind => message.kind.label().eq_ignore_ascii_case(&filter.value),
        FilterField::Since => start_of_day(&filter.value).is_some_and(|d| message.created_at >= d),
        FilterField::Until => start_of_day(&filter.value).is_some_and(|d| message.created_at < d),
    }
}

/// Midnight UTC of a YYYY-MM-DD date
fn start_of_day(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
