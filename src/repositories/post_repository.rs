// src/repositories/post_repository.rs - client for the remote blog API

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use urlencoding::encode;

use crate::dtos::post_dtos::{ApiEnvelope, ApiPost, CreateCommentDTO, CreatePostDTO, PostsPage};
use crate::services::error_mapper::classify_failure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error("api responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Operations the pages need from the blog API.
#[async_trait]
pub trait PostApi: Send + Sync {
    async fn list_posts(&self, title: Option<&str>) -> Result<Vec<ApiPost>, ApiError>;
    async fn get_post(&self, id: &str) -> Result<ApiPost, ApiError>;
    async fn create_post(&self, post: &CreatePostDTO) -> Result<(), ApiError>;
    async fn delete_post(&self, id: &str) -> Result<(), ApiError>;
    async fn add_comment(&self, id: &str, comment: &CreateCommentDTO) -> Result<(), ApiError>;
    async fn like_post(&self, id: &str) -> Result<(), ApiError>;
}

/// Decodes each listed post on its own; entries that fail are skipped so one
/// bad row does not empty the page.
pub(crate) fn decode_listing(posts: Vec<Value>) -> Vec<ApiPost> {
    posts
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<ApiPost>(value) {
            Ok(post) => Some(post),
            Err(e) => {
                warn!("skipping undecodable post in listing: {}", e);
                None
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct PostRepository {
    client: Client,
    base_url: String,
}

impl PostRepository {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    fn post_url(&self, id: &str) -> String {
        format!("{}/api/posts/{}", self.base_url, encode(id))
    }

    fn comments_url(&self, id: &str) -> String {
        format!("{}/comments", self.post_url(id))
    }

    fn like_url(&self, id: &str) -> String {
        format!("{}/like", self.post_url(id))
    }

    /// Reads the body and turns a non-2xx answer into a classified error.
    async fn checked_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        debug!("api response status: {}", status);

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = Self::checked_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PostApi for PostRepository {
    async fn list_posts(&self, title: Option<&str>) -> Result<Vec<ApiPost>, ApiError> {
        let mut request = self.client.get(self.posts_url());
        if let Some(title) = title {
            request = request.query(&[("title", title)]);
        }

        let envelope: ApiEnvelope<PostsPage> = Self::decode(request.send().await?).await?;
        Ok(decode_listing(envelope.data.posts))
    }

    async fn get_post(&self, id: &str) -> Result<ApiPost, ApiError> {
        let response = self.client.get(self.post_url(id)).send().await?;
        let envelope: ApiEnvelope<ApiPost> = Self::decode(response).await?;
        Ok(envelope.data)
    }

    async fn create_post(&self, post: &CreatePostDTO) -> Result<(), ApiError> {
        let response = self.client.post(self.posts_url()).json(post).send().await?;
        Self::checked_body(response).await.map(|_| ())
    }

    async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.post_url(id)).send().await?;
        Self::checked_body(response).await.map(|_| ())
    }

    async fn add_comment(&self, id: &str, comment: &CreateCommentDTO) -> Result<(), ApiError> {
        let response = self.client.post(self.comments_url(id)).json(comment).send().await?;
        Self::checked_body(response).await.map(|_| ())
    }

    async fn like_post(&self, id: &str) -> Result<(), ApiError> {
        let response = self.client.post(self.like_url(id)).send().await?;
        Self::checked_body(response).await.map(|_| ())
    }
}
