//! DTO modules that bridge list services with the views.

pub mod list;
pub mod rows;
