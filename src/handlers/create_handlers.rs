use actix_web::{get, http::StatusCode, post, web, HttpResponse};
use log::{error, info, warn};

use crate::dtos::form_dtos::CreatePostForm;
use crate::dtos::post_dtos::CreatePostDTO;
use crate::handlers::redirect;
use crate::models::form_errors::{FormErrors, GENERIC_CREATE_ERROR};
use crate::services::error_mapper::form_errors_for;
use crate::views::pages::CreateTemplate;
use crate::views::{render_html, Chrome};
use crate::AppState;

#[get("/create")]
pub async fn create_form(app_state: web::Data<AppState>) -> HttpResponse {
    render_html(&CreateTemplate {
        chrome: Chrome::new(&app_state.owner),
        values: &CreatePostForm::default(),
        errors: &FormErrors::default(),
    })
}

/// POST /create
/// Fields go to the API untouched; validation is whatever the API reports.
#[post("/create")]
pub async fn create_post(app_state: web::Data<AppState>, form: web::Form<CreatePostForm>) -> HttpResponse {
    let values = form.into_inner();
    let dto = CreatePostDTO {
        title: values.title.clone(),
        content: values.content.clone(),
        author: values.author.clone(),
        cover: values.cover.clone(),
    };

    match app_state.api.create_post(&dto).await {
        Ok(()) => {
            info!("Created post {:?} by {:?}", dto.title, dto.author);
            redirect(StatusCode::FOUND, "/")
        }
        Err(e) => {
            if e.is_validation() {
                warn!("Post rejected by the API: {}", e);
            } else {
                error!("Error creating post: {}", e);
            }
            let errors = form_errors_for(&e).unwrap_or_else(|| FormErrors::uniform(GENERIC_CREATE_ERROR));
            if errors.is_empty() {
                warn!("Validation failure named none of the form fields");
            }
            render_html(&CreateTemplate {
                chrome: Chrome::new(&app_state.owner),
                values: &values,
                errors: &errors,
            })
        }
    }
}
