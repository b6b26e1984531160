//! Book row and request body.

use serde::{Deserialize, Serialize};

/// A row of the books table. `id` is assigned by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
}

/// Body of create and update requests. Absent fields are empty strings; an `id`
/// sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub description: String,
}

impl BookInput {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ignores_client_id_and_defaults_missing_fields() {
        let input: BookInput =
            serde_json::from_str(r#"{"id": 77, "title": "Dune"}"#).unwrap();
        assert_eq!(
            input,
            BookInput {
                title: "Dune".into(),
                author: String::new(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn input_rejects_wrong_field_type() {
        assert!(serde_json::from_str::<BookInput>(r#"{"title": 5}"#).is_err());
        assert!(serde_json::from_str::<BookInput>(r#""Dune""#).is_err());
        assert!(serde_json::from_str::<BookInput>("null").is_err());
    }

    #[test]
    fn book_json_shape() {
        let book = BookInput {
            title: "Dune".into(),
            author: "Herbert".into(),
            description: "scifi".into(),
        }
        .into_book(1);
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            serde_json::json!({
                "id": 1,
                "title": "Dune",
                "author": "Herbert",
                "description": "scifi"
            })
        );
    }
}
