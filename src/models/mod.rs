pub mod form_errors;
pub mod post;
pub mod view_mode;
