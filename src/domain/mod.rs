//! Domain types and the query engine shared by the server and the client.

pub mod query;
pub mod user;
