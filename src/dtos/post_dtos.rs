// Wire shapes exchanged with the remote blog API.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "data": ... }` wrapper used by every successful API response.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Payload of `GET /api/posts`. Posts stay as raw JSON so a single
/// malformed entry can be skipped without losing the rest of the page.
#[derive(Debug, Default, Deserialize)]
pub struct PostsPage {
    #[serde(default)]
    pub posts: Vec<Value>,
}

/// A post as the API sends it. Both spellings of the id and of each
/// timestamp are read into their own fields, since some backends send both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiPost {
    #[serde(rename = "_id", default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at_camel: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at_camel: Option<String>,
    /// Full comment objects on detail responses, often bare ids on listings.
    #[serde(default)]
    pub comments: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiComment {
    #[serde(rename = "_id", default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at_camel: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePostDTO {
    pub title: String,
    pub content: String,
    pub author: String,
    pub cover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCommentDTO {
    pub author: String,
    pub content: String,
}

/// `{ "error": { "details": [...] } }` returned when the API rejects fields.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorPayload,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub details: Vec<ValidationDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ValidationDetail {
    #[serde(alias = "field")]
    pub path: DetailPath,
    pub message: String,
}

/// Validators report the offending field either as a plain name or as a
/// list of path segments (`["title"]`, `["comments", 0, "author"]`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DetailPath {
    Name(String),
    Segments(Vec<Value>),
}

impl DetailPath {
    pub fn field_name(&self) -> Option<&str> {
        match self {
            DetailPath::Name(name) => Some(name.as_str()),
            DetailPath::Segments(segments) => segments.first().and_then(Value::as_str),
        }
    }
}
