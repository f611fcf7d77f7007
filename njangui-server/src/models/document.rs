//! Stored document shape shared by every collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Free-form document body
pub type Fields = Map<String, Value>;

/// Keys assigned by the store. Clients cannot set them.
pub const RESERVED_FIELDS: &[&str] = &["_id", "createdAt", "updatedAt", "__v"];

/// A persisted document: system fields plus whatever the client sent.
///
/// Serialises flat, e.g.
/// `{"_id": "...", "name": "Group A", "createdAt": "...", "updatedAt": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: Uuid,

    #[serde(flatten)]
    pub fields: Fields,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Look up a client field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Client field as a string slice, if it is one.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}
