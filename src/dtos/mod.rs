pub mod form_dtos;
pub mod post_dtos;
