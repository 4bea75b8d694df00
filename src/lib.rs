//! Core of the club management front end: paged and searched entity lists,
//! money formatting and backend error normalization for players, coaches
//! and clubs.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod errors;
pub mod formatting;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

/// Page size used by list views unless configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Quiet period between the last keystroke and the search request.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Number of pages shown on each side of the current page in the pager.
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// Label shown for money amounts that were never filled in.
pub const MISSING_VALUE_LABEL: &str = "Sin valor";

/// Message used when a backend error payload has no recognizable shape.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";
