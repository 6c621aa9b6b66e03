//! GronkhTV addon for Stremio.
//!
//! Proxies the GronkhTV API into the Stremio addon protocol: one catalog with
//! search and pagination, episode detail records, and direct playlist streams.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
