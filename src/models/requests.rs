//! Request DTOs for the text metrics API
//!
//! Defines the structure of incoming HTTP request bodies and query
//! parameters.

use serde::Deserialize;

/// Request body for creating a text document (POST /texts)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTextRequest {
    /// The document content
    pub content: String,
}

impl CreateTextRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_content(&self.content)
    }
}

/// Request body for updating a text document (PUT /texts/:id)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTextRequest {
    /// The replacement content
    pub content: String,
}

impl UpdateTextRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_content(&self.content)
    }
}

fn validate_content(content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return Some("Text content cannot be empty".to_string());
    }
    None
}

/// Query parameters for the character count endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterCountQuery {
    /// Count whitespace characters as well (default: false)
    #[serde(default, rename = "includeWhitespace")]
    pub include_whitespace: bool,
}

/// Query parameters for the longest words endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LongestWordsQuery {
    /// Return every word at maximum length instead of the first (default: false)
    #[serde(default, rename = "returnAll")]
    pub return_all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"content": "Hello world"}"#;
        let req: CreateTextRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.content, "Hello world");
    }

    #[test]
    fn test_validate_empty_content() {
        let req = CreateTextRequest {
            content: "".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_whitespace_only_content() {
        let req = UpdateTextRequest {
            content: "   \n".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_content() {
        let req = CreateTextRequest {
            content: "Some text".to_string(),
        };
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_character_query_defaults_to_excluding_whitespace() {
        let query: CharacterCountQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.include_whitespace);
    }

    #[test]
    fn test_character_query_accepts_camel_case() {
        let query: CharacterCountQuery =
            serde_json::from_str(r#"{"includeWhitespace": true}"#).unwrap();
        assert!(query.include_whitespace);
    }

    #[test]
    fn test_longest_query_accepts_camel_case() {
        let query: LongestWordsQuery = serde_json::from_str(r#"{"returnAll": true}"#).unwrap();
        assert!(query.return_all);
    }
}
