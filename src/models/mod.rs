//! Settings models shared across the list services.

pub mod config;
