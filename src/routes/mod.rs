//! HTTP routes of the search service.

pub mod api;
