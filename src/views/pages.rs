use askama::Template;

use crate::dtos::form_dtos::CreatePostForm;
use crate::models::form_errors::FormErrors;
use crate::models::post::Post;
use crate::views::components::PostListingTemplate;
use crate::views::Chrome;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub chrome: Chrome,
    pub listing: PostListingTemplate<'a>,
}

#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate<'a> {
    pub chrome: Chrome,
    pub listing: PostListingTemplate<'a>,
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate<'a> {
    pub chrome: Chrome,
    pub post: &'a Post,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub chrome: Chrome,
}

#[derive(Template)]
#[template(path = "create.html")]
pub struct CreateTemplate<'a> {
    pub chrome: Chrome,
    pub values: &'a CreatePostForm,
    pub errors: &'a FormErrors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::dtos::post_dtos::ApiPost;
    use crate::models::form_errors::GENERIC_CREATE_ERROR;
    use crate::models::view_mode::ViewMode;

    fn chrome() -> Chrome {
        Chrome { owner: "Ana".into(), year: 2026 }
    }

    fn post() -> Post {
        Post::from_api(ApiPost {
            id: Some("p1".into()),
            title: Some("Hello world".into()),
            content: Some("First paragraph\nSecond paragraph".into()),
            author: Some("Bo".into()),
            likes: Some(3),
            created_at: Some("2024-03-05T10:00:00Z".into()),
            comments: Some(vec![json!({ "author": "Cy", "content": "Nice post" })]),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn layout_carries_owner_and_year() {
        let html = NotFoundTemplate { chrome: chrome() }.render().unwrap();
        assert!(html.contains("Ana&#x27;s Blog") || html.contains("Ana's Blog"));
        assert!(html.contains("2026"));
        assert!(html.contains("Oops! Post not found"));
    }

    #[test]
    fn detail_renders_paragraphs_and_comments() {
        let post = post();
        let html = PostDetailTemplate { chrome: chrome(), post: &post }.render().unwrap();
        assert!(html.contains("<p>First paragraph</p>"));
        assert!(html.contains("<p>Second paragraph</p>"));
        assert!(html.contains("March 5, 2024"));
        assert!(html.contains("Comments (1)"));
        assert!(html.contains("Nice post"));
        assert!(html.contains("date unavailable"));
        assert!(html.contains("post-cover-placeholder"));
        assert!(!html.contains("Be the first to comment"));
    }

    #[test]
    fn detail_without_comments_invites_one() {
        let mut post = post();
        post.comments.clear();
        let html = PostDetailTemplate { chrome: chrome(), post: &post }.render().unwrap();
        assert!(html.contains("Comments (0)"));
        assert!(html.contains("Be the first to comment"));
    }

    #[test]
    fn home_renders_both_layouts_with_list_visible_by_default() {
        let posts = vec![post()];
        let html = HomeTemplate { chrome: chrome(), listing: PostListingTemplate::new(&posts, ViewMode::List) }
            .render()
            .unwrap();
        assert!(html.contains("data-layout=\"list\">"));
        assert!(html.contains("data-layout=\"grid\" hidden>"));
        assert!(html.contains("Grid view</button>"));
    }

    #[test]
    fn home_with_no_posts_says_so() {
        let html = HomeTemplate { chrome: chrome(), listing: PostListingTemplate::new(&[], ViewMode::Grid) }
            .render()
            .unwrap();
        assert!(html.contains("No posts"));
        assert!(!html.contains("data-view-toggle"));
    }

    #[test]
    fn search_reports_result_count() {
        let posts = vec![post()];
        let html = SearchTemplate { chrome: chrome(), listing: PostListingTemplate::new(&posts, ViewMode::List), title: "hello" }
            .render()
            .unwrap();
        assert!(html.contains("Showing 1 result for"));

        let html = SearchTemplate { chrome: chrome(), listing: PostListingTemplate::new(&[], ViewMode::List), title: "zzz" }
            .render()
            .unwrap();
        assert!(html.contains("No results found for"));

        let html = SearchTemplate { chrome: chrome(), listing: PostListingTemplate::new(&[], ViewMode::List), title: "" }
            .render()
            .unwrap();
        assert!(!html.contains("search-info"));
    }

    #[test]
    fn create_form_shows_only_reported_errors() {
        let values = CreatePostForm { title: "Draft".into(), ..Default::default() };
        let errors = FormErrors { title: Some("required".into()), ..Default::default() };
        let html = CreateTemplate { chrome: chrome(), values: &values, errors: &errors }
            .render()
            .unwrap();
        assert_eq!(html.matches("class=\"error-message\"").count(), 1);
        assert!(html.contains("<p class=\"error-message\">required</p>"));
        assert!(html.contains("value=\"Draft\""));

        let errors = FormErrors::uniform(GENERIC_CREATE_ERROR);
        let html = CreateTemplate { chrome: chrome(), values: &values, errors: &errors }
            .render()
            .unwrap();
        assert_eq!(html.matches(GENERIC_CREATE_ERROR).count(), 4);
    }
}
