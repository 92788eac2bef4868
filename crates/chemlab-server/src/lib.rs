//! # chemlab-server
//!
//! HTTP API for the ChemLab experiment calculators.

pub mod server;

pub use server::{Server, ServerConfig};
