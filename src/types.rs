//! Common types used throughout the Stripe client
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple resources.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Free-form key/value metadata attached to API objects
pub type Metadata = HashMap<String, String>;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    DELETE,
}

impl Method {
    /// Whether parameters travel in the query string rather than the body
    pub fn uses_query(self) -> bool {
        matches!(self, Method::GET | Method::DELETE)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::DELETE => "DELETE",
        };
        f.write_str(name)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

// ============================================================================
// Currency
// ============================================================================

/// Three-letter ISO currency code, lowercase on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(Cow<'static, str>);

impl Currency {
    pub const USD: Currency = Currency(Cow::Borrowed("usd"));
    pub const EUR: Currency = Currency(Cow::Borrowed("eur"));
    pub const GBP: Currency = Currency(Cow::Borrowed("gbp"));
    pub const CAD: Currency = Currency(Cow::Borrowed("cad"));
    pub const AUD: Currency = Currency(Cow::Borrowed("aud"));
    pub const JPY: Currency = Currency(Cow::Borrowed("jpy"));

    /// Create a currency from any code; the code is lowercased
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(Cow::Owned(code.as_ref().to_ascii_lowercase()))
    }

    /// The wire representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Expandable
// ============================================================================

/// A field that is either an object ID or, when expanded, the full object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T> Expandable<T> {
    /// The expanded object, if present
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Object(obj) => Some(obj),
            Expandable::Id(_) => None,
        }
    }

    /// Whether only the ID was returned
    pub fn is_id(&self) -> bool {
        matches!(self, Expandable::Id(_))
    }
}

impl<T: HasId> Expandable<T> {
    /// The object ID, whether expanded or not
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(obj) => obj.id(),
        }
    }
}

/// Objects that carry an API identifier
pub trait HasId {
    fn id(&self) -> &str;
}

// ============================================================================
// Balance Transaction
// ============================================================================

/// Balance transaction backing a charge or refund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub fee: i64,
    #[serde(default)]
    pub net: i64,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub status: Option<String>,
}

impl HasId for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}
