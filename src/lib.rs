pub mod catalog;
pub mod config;
pub mod error;
pub mod relay;
pub mod server;
pub mod webhook;

pub use error::{Error, RelayError, Result};
