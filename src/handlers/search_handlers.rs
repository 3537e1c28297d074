use actix_web::{get, web, HttpResponse};
use log::{info, warn};

use crate::dtos::form_dtos::SearchQuery;
use crate::models::post::{normalize_posts, Post};
use crate::models::view_mode::ViewMode;
use crate::views::components::PostListingTemplate;
use crate::views::pages::SearchTemplate;
use crate::views::{render_html, Chrome};
use crate::AppState;

/// GET /search?title=... - an empty term shows no results and skips the API.
#[get("/search")]
pub async fn search(app_state: web::Data<AppState>, query: web::Query<SearchQuery>) -> HttpResponse {
    let title = query.normalized_title();

    let posts: Vec<Post> = if title.is_empty() {
        Vec::new()
    } else {
        match app_state.api.list_posts(Some(&title)).await {
            Ok(raw) => {
                let posts = normalize_posts(raw);
                info!("Search for {:?} returned {} post(s)", title, posts.len());
                posts
            }
            Err(e) => {
                warn!("Search for {:?} failed, showing no results: {}", title, e);
                Vec::new()
            }
        }
    };

    render_html(&SearchTemplate {
        chrome: Chrome::new(&app_state.owner),
        listing: PostListingTemplate::new(&posts, ViewMode::List),
        title: &title,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use crate::handlers::configure;
    use crate::handlers::test_support::{app_state, body_text, post, FakePostApi, Failure};

    #[actix_web::test]
    async fn empty_query_skips_the_api() {
        let api = Arc::new(FakePostApi::with_posts(vec![post("1", "Never shown")]));
        let app = test::init_service(App::new().app_data(app_state(api.clone())).configure(configure)).await;

        for uri in ["/search", "/search?title=", "/search?title=%20%20"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert!(!body_text(resp).await.contains("Never shown"));
        }
        assert!(api.calls().is_empty());
    }

    #[actix_web::test]
    async fn query_is_trimmed_and_lowercased() {
        let api = Arc::new(FakePostApi::with_posts(vec![post("1", "Rust Tips")]));
        let app = test::init_service(App::new().app_data(app_state(api.clone())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/search?title=%20RuSt%20").to_request();
        let html = body_text(test::call_service(&app, req).await).await;
        assert_eq!(api.calls(), ["list:rust"]);
        assert!(html.contains("Rust Tips"));
        assert!(html.contains("Showing 1 result for"));
    }

    #[actix_web::test]
    async fn api_failure_shows_no_results() {
        let api = Arc::new(FakePostApi::failing(Failure::Status(500)));
        let app = test::init_service(App::new().app_data(app_state(api.clone())).configure(configure)).await;

        let req = test::TestRequest::get().uri("/search?title=rust").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("No results found for"));
    }
}
