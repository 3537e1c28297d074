pub mod create_handlers;
pub mod home_handlers;
pub mod post_handlers;
pub mod search_handlers;

use actix_web::{http::header, http::StatusCode, web, HttpResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home_handlers::home)
        .service(search_handlers::search)
        .service(create_handlers::create_form)
        .service(create_handlers::create_post)
        .service(post_handlers::show_post)
        .service(post_handlers::post_action);
}

fn text_response(status: StatusCode, message: &'static str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(mime::TEXT_PLAIN_UTF_8)
        .body(message)
}

fn redirect(status: StatusCode, location: &str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((header::LOCATION, location))
        .finish()
}
