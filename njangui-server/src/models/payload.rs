//! Create payload validation
//!
//! Only the business key is checked. Every other field passes through
//! untouched, except the reserved system fields which are dropped.

use serde_json::Value;

use super::{Fields, Resource, ValidationError, RESERVED_FIELDS};

/// Maximum length for a business key, in characters
const MAX_KEY_LEN: usize = 256;

/// Validated body of a create request
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePayload {
    key: String,
    fields: Fields,
}

impl CreatePayload {
    /// Validate a raw JSON body for resource `R`.
    ///
    /// # Rules
    /// - Body must be a JSON object
    /// - `R::KEY_FIELD` must be a string, not blank, at most 256 characters
    ///
    /// # Example
    /// ```
    /// use njangui_server::models::{CreatePayload, Fund};
    /// use serde_json::json;
    ///
    /// assert!(CreatePayload::parse::<Fund>(json!({"name": "Group A"})).is_ok());
    /// assert!(CreatePayload::parse::<Fund>(json!({"name": "  "})).is_err());
    /// assert!(CreatePayload::parse::<Fund>(json!(["name"])).is_err());
    /// ```
    pub fn parse<R: Resource>(body: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut fields) = body else {
            return Err(ValidationError::NotAnObject);
        };

        for reserved in RESERVED_FIELDS {
            fields.remove(*reserved);
        }

        let key = match fields.get(R::KEY_FIELD) {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing {
                    field: R::KEY_FIELD,
                })
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ValidationError::NotAString {
                    field: R::KEY_FIELD,
                })
            }
        };

        if key.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: R::KEY_FIELD,
            });
        }

        if key.chars().count() > MAX_KEY_LEN {
            return Err(ValidationError::TooLong {
                field: R::KEY_FIELD,
                max: MAX_KEY_LEN,
            });
        }

        Ok(Self { key, fields })
    }

    /// The business key value.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// All client fields, key included.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consume and return the fields for insertion.
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fund, Member};
    use serde_json::json;

    #[test]
    fn accepts_extra_fields() {
        let payload =
            CreatePayload::parse::<Fund>(json!({"name": "Group A", "rate": 0.05})).unwrap();
        assert_eq!(payload.key(), "Group A");
        assert_eq!(payload.fields()["rate"], json!(0.05));
    }

    #[test]
    fn drops_reserved_fields() {
        let payload = CreatePayload::parse::<Member>(json!({
            "phoneNumber": "555-0100",
            "_id": "forged",
            "createdAt": "1970-01-01T00:00:00Z",
            "__v": 3
        }))
        .unwrap();

        let fields = payload.into_fields();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("phoneNumber"));
    }

    #[test]
    fn rejects_non_object() {
        let err = CreatePayload::parse::<Fund>(json!("Group A")).unwrap_err();
        assert_eq!(err, ValidationError::NotAnObject);
    }

    #[test]
    fn rejects_missing_key() {
        let err = CreatePayload::parse::<Member>(json!({"name": "Ada"})).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "phoneNumber" });

        let err = CreatePayload::parse::<Member>(json!({"phoneNumber": null})).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "phoneNumber" });
    }

    #[test]
    fn rejects_non_string_key() {
        let err = CreatePayload::parse::<Member>(json!({"phoneNumber": 5550100})).unwrap_err();
        assert_eq!(err, ValidationError::NotAString { field: "phoneNumber" });
    }

    #[test]
    fn rejects_blank_key() {
        let err = CreatePayload::parse::<Fund>(json!({"name": " \t"})).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn max_length() {
        let ok = "a".repeat(256);
        assert!(CreatePayload::parse::<Fund>(json!({ "name": ok })).is_ok());

        let long = "a".repeat(257);
        let err = CreatePayload::parse::<Fund>(json!({ "name": long })).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 256, .. }));
    }
}
