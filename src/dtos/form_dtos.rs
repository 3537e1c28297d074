use serde::Deserialize;

/// Fields of the create-post form. Absent fields arrive as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cover: String,
}

/// Body of `POST /post/{id}`; which extra fields matter depends on `action`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostActionForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: Option<String>,
}

impl SearchQuery {
    /// Trimmed, lowercased search term; empty when nothing usable was sent.
    pub fn normalized_title(&self) -> String {
        self.title
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub view: Option<String>,
}
