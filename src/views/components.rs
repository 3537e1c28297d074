// Post card, list item and the listing that lays them out.
use askama::Template;
use log::error;

use crate::models::post::Post;
use crate::models::view_mode::ViewMode;

#[derive(Template)]
#[template(path = "components/post_card.html")]
pub struct PostCardTemplate<'a> {
    pub post: &'a Post,
}

#[derive(Template)]
#[template(path = "components/post_list_item.html")]
pub struct PostListItemTemplate<'a> {
    pub post: &'a Post,
}

#[derive(Template)]
#[template(path = "components/post_listing.html")]
pub struct PostListingTemplate<'a> {
    pub posts: &'a [Post],
    pub mode: ViewMode,
    pub hidden: bool,
}

impl<'a> PostListingTemplate<'a> {
    pub fn new(posts: &'a [Post], mode: ViewMode) -> Self {
        Self { posts, mode, hidden: false }
    }

    /// Same posts, same order, in the other layout. Visibility flips too,
    /// so a page can carry both and swap them client-side.
    pub fn toggled(&self) -> Self {
        Self {
            posts: self.posts,
            mode: self.mode.toggle(),
            hidden: !self.hidden,
        }
    }

    fn item(&self, post: &Post) -> String {
        let rendered = match self.mode {
            ViewMode::Grid => PostCardTemplate { post }.render(),
            ViewMode::List => PostListItemTemplate { post }.render(),
        };
        rendered.unwrap_or_else(|e| {
            error!("Failed to render post {}: {}", post.id, e);
            String::new()
        })
    }
}
