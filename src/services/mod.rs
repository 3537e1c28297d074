pub mod error_mapper;
