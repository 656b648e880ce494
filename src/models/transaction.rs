//! This file defines a transaction between a user and a recipient.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// A newtype wrapper for transaction IDs.
///
/// Transaction IDs are decimal strings assigned sequentially within the
/// transaction collection, independent of user IDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new transaction ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The direction of a transaction from the user's point of view.
///
/// Matched case-insensitively by the validator, lowercase at rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming into the user's account.
    Credit,
    /// Money leaving the user's account.
    Debit,
}

impl TransactionType {
    /// Parse an already lowercased transaction type string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None,
        }
    }

    /// The lowercase wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction created on behalf of a user.
///
/// The user is referenced by ID only, never held as a live object: if the
/// user collection could ever shrink, the reference would simply dangle.
/// `recipient_id` is an opaque identifier and is deliberately never checked
/// against the user collection, since recipients may be external parties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID assigned by the transaction store.
    pub id: TransactionId,
    /// The user the transaction belongs to.
    pub user_id: UserId,
    /// The amount of money moved, rounded to a whole number.
    pub amount: i64,
    /// Whether the transaction is a credit or a debit.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Who the money went to or came from.
    pub recipient_id: String,
}

/// A validated, normalized transaction that has not been assigned an ID yet.
///
/// Produced by [validate_transaction](crate::validation::validate_transaction)
/// and consumed by
/// [TransactionStore::create](crate::stores::TransactionStore::create).
#[derive(Clone, Debug, PartialEq)]
pub struct NewTransaction {
    /// The user the transaction belongs to. Existence is checked by the
    /// service, not the validator.
    pub user_id: UserId,
    /// The amount, already rounded to the nearest whole number.
    pub amount: i64,
    /// Whether the transaction is a credit or a debit.
    pub kind: TransactionType,
    /// Who the money went to or came from.
    pub recipient_id: String,
}

#[cfg(test)]
mod transaction_tests {
    use serde_json::json;

    use super::{Transaction, TransactionId, TransactionType};
    use crate::models::UserId;

    #[test]
    fn serializes_with_wire_field_names() {
        let transaction = Transaction {
            id: TransactionId::new("1"),
            user_id: UserId::new("1"),
            amount: 100,
            kind: TransactionType::Credit,
            recipient_id: "R1".to_owned(),
        };

        let got = serde_json::to_value(&transaction).unwrap();
        let want = json!({
            "id": "1",
            "userId": "1",
            "amount": 100,
            "type": "credit",
            "recipientId": "R1",
        });

        assert_eq!(got, want, "want {want}, got {got}");
    }

    #[test]
    fn amount_serializes_as_json_integer() {
        let transaction = Transaction {
            id: TransactionId::new("1"),
            user_id: UserId::new("1"),
            amount: 250,
            kind: TransactionType::Debit,
            recipient_id: "R1".to_owned(),
        };

        let text = serde_json::to_string(&transaction).unwrap();

        assert!(
            text.contains("\"amount\":250"),
            "want integer amount in {text}"
        );
    }
}
