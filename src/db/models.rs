use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A wiki article stored in the `articles` collection.
///
/// The schema is deliberately loose: both fields are optional and nothing is
/// unique, so the store may legally hold partial documents or several
/// articles sharing one title. Item-level operations match on `title` and
/// affect only the first document in store-native order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Store-assigned identifier; absent on client-supplied payloads.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Natural identifier for item-level routes; not enforced unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Request payload for POST (create) and PUT (full replace).
///
/// Absent fields stay absent in the persisted document, not empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticlePayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticlePayload {
    /// Build the document to persist. PUT replace semantics rely on this
    /// carrying only what the client supplied.
    pub fn into_article(self) -> Article {
        Article {
            id: None,
            title: self.title,
            content: self.content,
        }
    }
}
