pub mod auth;
pub mod completeness;
pub mod fields;
pub mod form;
pub mod handlers;
