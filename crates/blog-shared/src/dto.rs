//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured author as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a post.
///
/// Every field is optional at the serde level so a missing one can be
/// reported by name instead of failing deserialization wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<AuthorPayload>,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Partial update of a post. `id`, when present, must match the path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

/// Wire form of a post. `author` is the flattened display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_payload_is_camel_case() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"author":{"firstName":"Ira","lastName":"Glass"},"title":"T","content":"C"}"#,
        )
        .unwrap();
        let author = req.author.unwrap();
        assert_eq!(author.first_name, "Ira");
        assert_eq!(author.last_name, "Glass");
        assert!(req.created.is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert!(req.author.is_none());
        assert!(req.content.is_none());
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let req = UpdatePostRequest {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "New" }));
    }
}
