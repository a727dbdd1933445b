//! Configuration storage.
//!
//! Settings live in a JSON file under `%APPDATA%/LayerPin/`. Pin state is
//! never stored.

pub mod config;

pub use config::Config;
