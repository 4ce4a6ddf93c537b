//! Models loaded from the environment at startup.

pub mod config;
