use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use urlencoding::encode;

use crate::dtos::post_dtos::{ApiComment, ApiPost};

pub const DATE_UNAVAILABLE: &str = "date unavailable";
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A post as the views see it: every field defaulted, nothing left to guess.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub cover: Option<String>,
    pub likes: u64,
    pub created_at: PostDate,
    pub updated_at: PostDate,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Option<String>,
    pub author: String,
    pub content: String,
    pub created_at: PostDate,
}

/// Optional timestamp. Displays as a long date or the unavailable marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PostDate(Option<DateTime<FixedOffset>>);

impl PostDate {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self(None);
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Self(Some(dt));
        }
        let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            });
        Self(naive.map(|n| n.and_utc().fixed_offset()))
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }

    /// Machine-readable value for `<time datetime>`; empty when unknown.
    pub fn iso(&self) -> String {
        self.0.map(|dt| dt.to_rfc3339()).unwrap_or_default()
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format("%B %-d, %Y")),
            None => f.write_str(DATE_UNAVAILABLE),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn first_non_blank(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    non_blank(preferred).or_else(|| non_blank(fallback))
}

impl Post {
    /// Normalizes a raw API post. Posts without an id or a title are not
    /// renderable and come back as `None`.
    pub fn from_api(raw: ApiPost) -> Option<Self> {
        let id = first_non_blank(raw.object_id, raw.id)?;
        let title = non_blank(raw.title)?;

        Some(Self {
            id,
            title,
            content: raw.content.unwrap_or_default(),
            author: non_blank(raw.author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            cover: non_blank(raw.cover),
            likes: raw.likes.map(|n| n.max(0) as u64).unwrap_or(0),
            created_at: PostDate::parse(first_non_blank(raw.created_at, raw.created_at_camel).as_deref()),
            updated_at: PostDate::parse(first_non_blank(raw.updated_at, raw.updated_at_camel).as_deref()),
            comments: raw
                .comments
                .unwrap_or_default()
                .into_iter()
                .map(Comment::from_value)
                .collect(),
        })
    }

    pub fn href(&self) -> String {
        format!("/post/{}", encode(&self.id))
    }

    pub fn cover_url(&self) -> Option<&str> {
        self.cover.as_deref()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

impl Comment {
    pub fn from_api(raw: ApiComment) -> Self {
        Self {
            id: first_non_blank(raw.object_id, raw.id),
            author: non_blank(raw.author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            content: raw.content.unwrap_or_default(),
            created_at: PostDate::parse(first_non_blank(raw.created_at_camel, raw.created_at).as_deref()),
        }
    }

    /// Listings may carry comment ids instead of comment objects. Every
    /// entry still yields a comment so the count stays right.
    pub fn from_value(value: Value) -> Self {
        let raw = match value {
            Value::String(id) => ApiComment {
                object_id: Some(id),
                ..Default::default()
            },
            other => serde_json::from_value(other).unwrap_or_default(),
        };
        Self::from_api(raw)
    }
}

/// Normalizes a whole listing, dropping entries that cannot be rendered.
pub fn normalize_posts(raw: Vec<ApiPost>) -> Vec<Post> {
    raw.into_iter().filter_map(Post::from_api).collect()
}
