//! User search service: an in-memory query engine behind an HTTP endpoint,
//! plus a typed client for that endpoint.
//!
//! - `data`: domain types, the query engine and the dataset repository.
//! - `server`: Actix-Web routes, services and configuration.
//! - `client`: the reqwest-based `client::SearchClient`.

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{build_server, configure, run};
