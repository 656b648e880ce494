//! This file defines a user of the mock bank and its supporting types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A newtype wrapper for user IDs.
///
/// IDs are decimal strings ("1", "2", ...) assigned sequentially by the user
/// store. The wrapper disambiguates user IDs from transaction IDs, leading to
/// better compile time errors when the two are mixed up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The tier of a user's account.
///
/// Input is matched case-insensitively by the validator; at rest and on the
/// wire the value is always lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// The free tier.
    Basic,
    /// The paid tier.
    Premium,
}

impl AccountType {
    /// Parse an already lowercased account type string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }

    /// The lowercase wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user of the mock bank.
///
/// Users are immutable once created; there are no update or delete
/// operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The ID assigned by the user store.
    pub id: UserId,
    /// The user's full name, "Firstname Lastname".
    pub name: String,
    /// The user's email address, stored trimmed.
    pub email: String,
    /// The account tier, lowercase at rest.
    pub account_type: AccountType,
}

/// A validated, normalized user that has not been assigned an ID yet.
///
/// Produced by [validate_user](crate::validation::validate_user) and consumed
/// by [UserStore::create](crate::stores::UserStore::create).
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    /// The user's full name, trimmed.
    pub name: String,
    /// The user's email address, trimmed.
    pub email: String,
    /// The account tier.
    pub account_type: AccountType,
}

#[cfg(test)]
mod user_tests {
    use serde_json::json;

    use super::{AccountType, User, UserId};

    #[test]
    fn serializes_with_wire_field_names() {
        let user = User {
            id: UserId::new("1"),
            name: "Akash Roy".to_owned(),
            email: "akash@example.com".to_owned(),
            account_type: AccountType::Premium,
        };

        let got = serde_json::to_value(&user).unwrap();
        let want = json!({
            "id": "1",
            "name": "Akash Roy",
            "email": "akash@example.com",
            "accountType": "premium",
        });

        assert_eq!(got, want, "want {want}, got {got}");
    }

    #[test]
    fn parses_account_types_from_lowercase() {
        assert_eq!(AccountType::parse("basic"), Some(AccountType::Basic));
        assert_eq!(AccountType::parse("premium"), Some(AccountType::Premium));
        assert_eq!(AccountType::parse("gold"), None);
        // The validator lowercases before parsing; mixed case is not this
        // type's job.
        assert_eq!(AccountType::parse("Premium"), None);
    }
}
