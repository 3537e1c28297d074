use crate::dtos::post_dtos::ApiErrorBody;
use crate::models::form_errors::{FormErrors, FormField};
use crate::repositories::post_repository::{ApiError, FieldViolation};

/// Turns a failed API response into an [`ApiError`].
///
/// A body shaped like `{ "error": { "details": [{ "path", "message" }] } }`
/// with at least one usable detail is a validation failure. Anything else,
/// including bodies that are not JSON at all, is a plain status failure.
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    let violations: Vec<FieldViolation> = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| {
            parsed
                .error
                .details
                .into_iter()
                .filter_map(|detail| {
                    detail.path.field_name().map(|field| FieldViolation {
                        field: field.to_string(),
                        message: detail.message,
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    if violations.is_empty() {
        ApiError::Status {
            status,
            body: body.to_string(),
        }
    } else {
        ApiError::Validation(violations)
    }
}

/// Per-field messages for the create form, or `None` when the error is not
/// a validation failure. Violations on fields the form does not have are
/// dropped.
pub fn form_errors_for(error: &ApiError) -> Option<FormErrors> {
    let ApiError::Validation(violations) = error else {
        return None;
    };

    let mut errors = FormErrors::default();
    for violation in violations {
        if let Ok(field) = violation.field.parse::<FormField>() {
            errors.set(field, violation.message.clone());
        }
    }
    Some(errors)
}
