//! Validation rules for diary items.
//!
//! Request bodies are inspected as raw JSON so that a wrongly-typed field
//! (`"description": 123`) produces a specific message instead of a generic
//! deserialization failure. Checks run in a fixed order: title, then
//! description, then image. The first violation wins.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Messages
   -------------------------------------------------------------------------- */

pub const MSG_INVALID_ID: &str = "Invalid id parameter";
pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_TITLE_NOT_STRING: &str = "Title must be a string";
pub const MSG_DESCRIPTION_NOT_STRING: &str = "Description must be a string";
pub const MSG_IMAGE_NOT_STRING: &str = "Image must be a string";

/* --------------------------------------------------------------------------
   Validated input
   -------------------------------------------------------------------------- */

/// The three mutable fields of an item, already validated.
///
/// Used for both create and full update; an update replaces all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ItemFields {
    /// Validate a create/update request body.
    ///
    /// Keys other than `title`, `description` and `image` are ignored, so a
    /// client may send back a full item record it previously received.
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let title = validate_title(body.get("title"))?;
        let description = optional_string(body.get("description"), MSG_DESCRIPTION_NOT_STRING)?;
        let image = optional_string(body.get("image"), MSG_IMAGE_NOT_STRING)?;

        Ok(Self {
            title,
            description,
            image,
        })
    }
}

/* --------------------------------------------------------------------------
   Field validation
   -------------------------------------------------------------------------- */

/// A title must be a string with at least one non-whitespace character.
///
/// The stored value is kept exactly as submitted (no trimming).
pub fn validate_title(value: Option<&Value>) -> Result<String, CoreError> {
    match value {
        None | Some(Value::Null) => Err(CoreError::Validation(MSG_TITLE_REQUIRED.to_string())),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(CoreError::Validation(MSG_TITLE_REQUIRED.to_string()))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CoreError::Validation(MSG_TITLE_NOT_STRING.to_string())),
    }
}

/// An absent key means "no value"; a present key, `null` included, must
/// be a string.
fn optional_string(value: Option<&Value>, message: &str) -> Result<Option<String>, CoreError> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(CoreError::Validation(message.to_string())),
    }
}

/// Parse an item id taken from a URL path segment.
///
/// Only positive base-10 integers are accepted.
pub fn parse_item_id(raw: &str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(MSG_INVALID_ID.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn validation_message(err: CoreError) -> String {
        match err {
            CoreError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // --- Id parsing ---

    #[test]
    fn parse_item_id_accepts_positive_integers() {
        assert_eq!(parse_item_id("1").unwrap(), 1);
        assert_eq!(parse_item_id("42").unwrap(), 42);
        assert_eq!(parse_item_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn parse_item_id_rejects_zero_and_negative() {
        for raw in ["0", "-1", "-999"] {
            let msg = validation_message(parse_item_id(raw).unwrap_err());
            assert_eq!(msg, MSG_INVALID_ID, "input {raw:?}");
        }
    }

    #[test]
    fn parse_item_id_rejects_non_numeric() {
        for raw in ["abc", "", "1.5", "12abc", "NaN"] {
            let msg = validation_message(parse_item_id(raw).unwrap_err());
            assert_eq!(msg, MSG_INVALID_ID, "input {raw:?}");
        }
    }

    // --- Title ---

    #[test]
    fn title_only_body_is_valid() {
        let fields = ItemFields::from_json(&json!({"title": "A"})).unwrap();
        assert_eq!(
            fields,
            ItemFields {
                title: "A".to_string(),
                description: None,
                image: None,
            }
        );
    }

    #[test]
    fn missing_title_is_rejected() {
        let msg = validation_message(ItemFields::from_json(&json!({})).unwrap_err());
        assert_eq!(msg, MSG_TITLE_REQUIRED);
    }

    #[test]
    fn empty_and_blank_titles_are_rejected() {
        for title in ["", "   ", "\n\t"] {
            let msg =
                validation_message(ItemFields::from_json(&json!({ "title": title })).unwrap_err());
            assert_eq!(msg, MSG_TITLE_REQUIRED);
        }
    }

    #[test]
    fn null_title_is_rejected() {
        let msg = validation_message(ItemFields::from_json(&json!({"title": null})).unwrap_err());
        assert_eq!(msg, MSG_TITLE_REQUIRED);
    }

    #[test]
    fn non_string_title_is_rejected() {
        let msg = validation_message(ItemFields::from_json(&json!({"title": 5})).unwrap_err());
        assert_eq!(msg, MSG_TITLE_NOT_STRING);
    }

    #[test]
    fn title_is_kept_verbatim() {
        let fields = ItemFields::from_json(&json!({"title": "  padded  "})).unwrap();
        assert_eq!(fields.title, "  padded  ");
    }

    #[test]
    fn non_object_body_has_no_title() {
        for body in [json!([1, 2]), json!("title"), json!(null)] {
            let msg = validation_message(ItemFields::from_json(&body).unwrap_err());
            assert_eq!(msg, MSG_TITLE_REQUIRED);
        }
    }

    // --- Description / image ---

    #[test]
    fn numeric_description_is_rejected() {
        let err = ItemFields::from_json(&json!({"title": "A", "description": 123})).unwrap_err();
        assert_eq!(validation_message(err), MSG_DESCRIPTION_NOT_STRING);
    }

    #[test]
    fn non_string_image_is_rejected() {
        let err = ItemFields::from_json(&json!({"title": "A", "image": {"url": "x"}})).unwrap_err();
        assert_eq!(validation_message(err), MSG_IMAGE_NOT_STRING);
    }

    #[test]
    fn title_is_checked_before_other_fields() {
        let err = ItemFields::from_json(&json!({"description": 1, "image": 2})).unwrap_err();
        assert_eq!(validation_message(err), MSG_TITLE_REQUIRED);
    }

    #[test]
    fn description_is_checked_before_image() {
        let err = ItemFields::from_json(&json!({"title": "A", "description": false, "image": 2}))
            .unwrap_err();
        assert_eq!(validation_message(err), MSG_DESCRIPTION_NOT_STRING);
    }

    #[test]
    fn null_description_is_rejected() {
        let err = ItemFields::from_json(&json!({"title": "A", "description": null})).unwrap_err();
        assert_eq!(validation_message(err), MSG_DESCRIPTION_NOT_STRING);
    }

    #[test]
    fn null_image_is_rejected() {
        let err = ItemFields::from_json(&json!({"title": "A", "image": null})).unwrap_err();
        assert_eq!(validation_message(err), MSG_IMAGE_NOT_STRING);
    }

    #[test]
    fn absent_optional_fields_are_none() {
        let fields = ItemFields::from_json(&json!({"title": "A"})).unwrap();
        assert_matches!(
            fields,
            ItemFields {
                description: None,
                image: None,
                ..
            }
        );
    }

    #[test]
    fn all_fields_and_extra_keys() {
        let body = json!({
            "id": 3,
            "title": "Day one",
            "description": "Went hiking",
            "image": "https://example.com/a.png",
            "createdAt": "2024-01-01T00:00:00Z",
        });
        let fields = ItemFields::from_json(&body).unwrap();
        assert_eq!(fields.title, "Day one");
        assert_eq!(fields.description.as_deref(), Some("Went hiking"));
        assert_eq!(fields.image.as_deref(), Some("https://example.com/a.png"));
    }
}
