use actix_web::{get, web, HttpResponse};
use log::warn;

use crate::dtos::form_dtos::HomeQuery;
use crate::models::post::normalize_posts;
use crate::models::view_mode::ViewMode;
use crate::views::components::PostListingTemplate;
use crate::views::pages::HomeTemplate;
use crate::views::{render_html, Chrome};
use crate::AppState;

/// GET / - latest posts with the grid/list toggle.
/// An unreachable API renders an empty listing instead of an error page.
#[get("/")]
pub async fn home(app_state: web::Data<AppState>, query: web::Query<HomeQuery>) -> HttpResponse {
    let posts = match app_state.api.list_posts(None).await {
        Ok(raw) => normalize_posts(raw),
        Err(e) => {
            warn!("Failed to list posts, rendering an empty list: {}", e);
            Vec::new()
        }
    };

    render_html(&HomeTemplate {
        chrome: Chrome::new(&app_state.owner),
        listing: PostListingTemplate::new(&posts, ViewMode::from_query(query.view.as_deref())),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};

    use crate::handlers::configure;
    use crate::handlers::test_support::{app_state, body_text, post, FakePostApi, Failure};

    #[actix_web::test]
    async fn lists_renderable_posts_in_order() {
        let api = Arc::new(FakePostApi::with_posts(vec![
            post("1", "First post"),
            post("2", ""),
            post("3", "Third post"),
        ]));
        let app = test::init_service(App::new().app_data(app_state(api.clone())).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;

        assert_eq!(html.matches("class=\"post-list-item\"").count(), 2);
        assert_eq!(html.matches("class=\"post-card\"").count(), 2);
        let first = html.find("First post").unwrap();
        let third = html.find("Third post").unwrap();
        assert!(first < third);
        assert!(html.contains("Tester"));
        assert_eq!(api.calls(), ["list:"]);
    }

    #[actix_web::test]
    async fn api_failure_degrades_to_empty_list() {
        let api = Arc::new(FakePostApi::failing(Failure::Status(503)));
        let app = test::init_service(App::new().app_data(app_state(api.clone())).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains("No posts"));
    }

    #[actix_web::test]
    async fn view_query_picks_initial_layout() {
        let api = Arc::new(FakePostApi::with_posts(vec![post("1", "Only post")]));
        let app = test::init_service(App::new().app_data(app_state(api.clone())).configure(configure)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/?view=grid").to_request()).await;
        let html = body_text(resp).await;
        assert!(html.contains("data-layout=\"list\" hidden>"));
        assert!(html.contains("data-layout=\"grid\">"));
        assert_eq!(api.calls().len(), 1);
    }
}
