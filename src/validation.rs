//! Pure validation of untyped request payloads.
//!
//! The HTTP layer hands these functions the request body exactly as it was
//! received, as a [serde_json::Value]. Each validator coerces the fields it
//! cares about, collects every field error in one pass rather than stopping
//! at the first, and on success returns the normalized draft record. Neither
//! function touches the stores: whether a referenced user exists is the
//! service's problem.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::{AccountType, NewTransaction, NewUser, TransactionType, UserId};

/// Matches names of the form "Firstname Lastname": two words, each an
/// uppercase letter followed by one or more lowercase letters.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+$").unwrap());

/// A practical email shape: `local@domain.tld` with a dot in the domain and
/// a TLD of at least two characters. Deliberately looser than the RFC
/// grammar.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());

/// Validate a raw user payload and normalize its fields.
///
/// `name` and `email` are coerced to trimmed strings; `accountType` is
/// additionally lowercased before being checked against the allowed set.
///
/// # Errors
///
/// Returns the ordered list of every field error. A payload can fail on
/// multiple fields at once and all of them are reported.
pub fn validate_user(payload: &Value) -> Result<NewUser, Vec<String>> {
    let mut errors = Vec::new();

    let name = coerce_string(payload.get("name"));
    let email = coerce_string(payload.get("email"));
    let account_type = coerce_string(payload.get("accountType")).to_lowercase();

    if name.is_empty() {
        errors.push("Missing name".to_owned());
    } else if !NAME_PATTERN.is_match(&name) {
        errors.push("Name must be 'Firstname Lastname' with capitalized words".to_owned());
    }

    if email.is_empty() {
        errors.push("Missing email".to_owned());
    } else if !EMAIL_PATTERN.is_match(&email) {
        errors.push("Invalid email format".to_owned());
    }

    let account_type = if account_type.is_empty() {
        errors.push("Missing accountType".to_owned());
        None
    } else {
        let parsed = AccountType::parse(&account_type);
        if parsed.is_none() {
            errors.push("accountType must be 'Basic' or 'Premium'".to_owned());
        }
        parsed
    };

    match account_type {
        Some(account_type) if errors.is_empty() => Ok(NewUser {
            name,
            email,
            account_type,
        }),
        _ => Err(errors),
    }
}

/// Validate a raw transaction payload and normalize its fields.
///
/// `userId`, `type` and `recipientId` are coerced to trimmed strings (`type`
/// lowercased); `amount` is coerced to a number and rounded to the nearest
/// whole number, and the *rounded* value is what must be greater than zero
/// and what ends up stored.
///
/// # Errors
///
/// Returns the ordered list of every field error.
pub fn validate_transaction(payload: &Value) -> Result<NewTransaction, Vec<String>> {
    let mut errors = Vec::new();

    let user_id = coerce_string(payload.get("userId"));
    let amount = coerce_number(payload.get("amount"));
    let kind = coerce_string(payload.get("type")).to_lowercase();
    let recipient_id = coerce_string(payload.get("recipientId"));

    if user_id.is_empty() {
        errors.push("Missing userId".to_owned());
    }

    if !amount.is_finite() {
        errors.push("amount must be a number".to_owned());
    }
    // Rounding runs even when the number check already failed. NaN rounds to
    // NaN and fails neither comparison below; the value is discarded with the
    // rest of the rejected payload. Keeping this ordering keeps the error
    // list identical for multi-error payloads.
    let amount = amount.round();
    if amount <= 0.0 {
        errors.push("amount must be > 0".to_owned());
    }

    let kind = if kind.is_empty() {
        errors.push("Missing type".to_owned());
        None
    } else {
        let parsed = TransactionType::parse(&kind);
        if parsed.is_none() {
            errors.push("type must be 'credit' or 'debit'".to_owned());
        }
        parsed
    };

    if recipient_id.is_empty() {
        errors.push("Missing recipientId".to_owned());
    }

    match kind {
        Some(kind) if errors.is_empty() => Ok(NewTransaction {
            user_id: UserId::new(user_id),
            amount: amount as i64,
            kind,
            recipient_id,
        }),
        _ => Err(errors),
    }
}

/// Coerce a JSON value to a trimmed string.
///
/// Mirrors how the UI and the test-data generator stringify form values:
/// absent and null become the empty string, scalars use their natural text
/// form, and anything else falls back to its compact JSON text.
fn coerce_string(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    };

    text.trim().to_owned()
}

/// Coerce a JSON value to a number.
///
/// Numeric strings parse (the empty string is zero), null is zero, booleans
/// are zero or one, and an array is joined with commas and parsed as a
/// string, so an empty array is zero and a single numeric element unwraps.
/// Anything else is NaN so the "must be a number" rule fires.
fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => parse_number_text(text),
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Null) => 0.0,
        Some(Value::Array(items)) => {
            let text = items
                .iter()
                .map(|item| coerce_string(Some(item)))
                .collect::<Vec<_>>()
                .join(",");

            parse_number_text(&text)
        }
        _ => f64::NAN,
    }
}

fn parse_number_text(text: &str) -> f64 {
    let text = text.trim();

    if text.is_empty() {
        0.0
    } else {
        text.parse().unwrap_or(f64::NAN)
    }
}
