//! Shared, read-mostly configuration store.
//!
//! Holds the loaded [`Config`](crate::config::Config) behind a lock and
//! resolves dot-separated paths for the CLI.

mod error;
mod store;


pub use error::ConfigError;
pub use store::ConfigStore;
