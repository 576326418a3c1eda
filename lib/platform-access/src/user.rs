//! The session user as reported by the marketplace backend.
//!
//! A `User` is a read-only snapshot. It is either absent (guest, or the
//! fetch failed) or fully formed: fields the backend omits or sends as
//! `null` take their documented defaults instead of failing the parse.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use skill_time_core::UserId;
use std::fmt;

use crate::role::Role;

/// An authenticated marketplace user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-issued user ID.
    #[serde(default, deserialize_with = "lenient_id")]
    id: UserId,
    /// Display name, if the user has set one.
    #[serde(default)]
    full_name: Option<String>,
    /// Email address, if known.
    #[serde(default)]
    email: Option<String>,
    /// Marketplace role.
    #[serde(default, deserialize_with = "null_as_default")]
    role: Role,
    /// Spendable credit balance.
    #[serde(default, deserialize_with = "lenient_credits")]
    wallet_credits: u64,
    /// Whether the user passed provider verification.
    #[serde(default, deserialize_with = "null_as_default")]
    verified_provider: bool,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Reads a credit balance from any JSON number.
///
/// Fractions are truncated and negative balances read as 0. `null` and
/// numeric strings are accepted as well.
fn lenient_credits<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CreditsVisitor;

    impl<'de> Visitor<'de> for CreditsVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a credit balance")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            Ok(u64::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if v.is_finite() && v > 0.0 {
                // `as` saturates at u64::MAX.
                Ok(v.trunc() as u64)
            } else {
                Ok(0)
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            let value: f64 = v
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))?;
            self.visit_f64(value)
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_none<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u64, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(CreditsVisitor)
}

/// Reads a user ID from a string or an integer; `null` is the empty ID.
fn lenient_id<'de, D>(deserializer: D) -> Result<UserId, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = UserId;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a user id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<UserId, E> {
            Ok(UserId::from(v))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<UserId, E> {
            Ok(UserId::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<UserId, E> {
            Ok(UserId::from(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<UserId, E> {
            Ok(UserId::from(v.to_string()))
        }

        fn visit_unit<E: de::Error>(self) -> Result<UserId, E> {
            Ok(UserId::default())
        }

        fn visit_none<E: de::Error>(self) -> Result<UserId, E> {
            Ok(UserId::default())
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<UserId, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

impl User {
    /// Creates a standard user with no optional fields.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Returns the user's ID.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the user's display name, if set.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Returns the user's email address, if known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the wallet balance in credits.
    #[must_use]
    pub fn wallet_credits(&self) -> u64 {
        self.wallet_credits
    }

    #[must_use]
    pub fn is_verified_provider(&self) -> bool {
        self.verified_provider
    }

    pub fn set_full_name(&mut self, full_name: Option<String>) {
        self.full_name = full_name;
    }

    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_wallet_credits(&mut self, wallet_credits: u64) {
        self.wallet_credits = wallet_credits;
    }

    pub fn set_verified_provider(&mut self, verified_provider: bool) {
        self.verified_provider = verified_provider;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_has_defaults() {
        let user = User::new(UserId::from("usr-1"));

        assert_eq!(user.id().as_str(), "usr-1");
        assert!(user.full_name().is_none());
        assert!(user.email().is_none());
        assert_eq!(user.role(), Role::Standard);
        assert_eq!(user.wallet_credits(), 0);
        assert!(!user.is_verified_provider());
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": "65f1c0ffee",
            "full_name": "Dana Lee",
            "email": "dana@example.com",
            "role": "admin",
            "wallet_credits": 150,
            "verified_provider": true,
            "created_date": "2025-01-04T10:00:00Z"
        }"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.id().as_str(), "65f1c0ffee");
        assert_eq!(user.full_name(), Some("Dana Lee"));
        assert_eq!(user.email(), Some("dana@example.com"));
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.wallet_credits(), 150);
        assert!(user.is_verified_provider());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let user: User = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(user, User::default());
    }

    #[test]
    fn null_fields_take_defaults() {
        let json = r#"{
            "id": "u1",
            "role": null,
            "wallet_credits": null,
            "verified_provider": null
        }"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert_eq!(user.role(), Role::Standard);
        assert_eq!(user.wallet_credits(), 0);
        assert!(!user.is_verified_provider());
    }

    #[test]
    fn fractional_credits_are_truncated() {
        let user: User =
            serde_json::from_str(r#"{"id": "u1", "wallet_credits": 150.0}"#).expect("deserialize");
        assert_eq!(user.wallet_credits(), 150);

        let user: User =
            serde_json::from_str(r#"{"id": "u1", "wallet_credits": 99.75}"#).expect("deserialize");
        assert_eq!(user.wallet_credits(), 99);
    }

    #[test]
    fn negative_credits_read_as_zero() {
        let user: User =
            serde_json::from_str(r#"{"wallet_credits": -20}"#).expect("deserialize");
        assert_eq!(user.wallet_credits(), 0);

        let user: User =
            serde_json::from_str(r#"{"wallet_credits": -0.5}"#).expect("deserialize");
        assert_eq!(user.wallet_credits(), 0);
    }

    #[test]
    fn numeric_string_credits_are_accepted() {
        let user: User =
            serde_json::from_str(r#"{"wallet_credits": "42"}"#).expect("deserialize");
        assert_eq!(user.wallet_credits(), 42);
        assert!(serde_json::from_str::<User>(r#"{"wallet_credits": "lots"}"#).is_err());
    }

    #[test]
    fn null_id_keeps_the_rest_of_the_user() {
        let json = r#"{"id": null, "role": "admin", "wallet_credits": 150.0}"#;

        let user: User = serde_json::from_str(json).expect("deserialize");
        assert!(user.id().is_empty());
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.wallet_credits(), 150);
    }

    #[test]
    fn numeric_id_is_read_as_text() {
        let user: User = serde_json::from_str(r#"{"id": 42}"#).expect("deserialize");
        assert_eq!(user.id().as_str(), "42");
    }

    #[test]
    fn setters_replace_fields() {
        let mut user = User::new(UserId::from("u1"));
        user.set_full_name(Some("Ari".to_string()));
        user.set_wallet_credits(12);
        user.set_verified_provider(true);

        assert_eq!(user.full_name(), Some("Ari"));
        assert_eq!(user.wallet_credits(), 12);
        assert!(user.is_verified_provider());
    }
}
