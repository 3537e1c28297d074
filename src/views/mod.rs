pub mod components;
pub mod pages;

use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;
use chrono::{Datelike, Local};
use log::error;

/// Data the shared layout needs on every page.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub owner: String,
    pub year: i32,
}

impl Chrome {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            year: Local::now().year(),
        }
    }
}

pub fn render_html<T: Template>(template: &T) -> HttpResponse {
    render_html_with_status(StatusCode::OK, template)
}

pub fn render_html_with_status<T: Template>(status: StatusCode, template: &T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type(mime::TEXT_HTML_UTF_8)
            .body(body),
        Err(e) => {
            error!("Failed to render {}: {}", std::any::type_name::<T>(), e);
            HttpResponse::InternalServerError()
                .content_type(mime::TEXT_PLAIN_UTF_8)
                .body("Error rendering page")
        }
    }
}
