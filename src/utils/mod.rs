//! Utility modules for the admin client
//!
//! - **error**: Error handling and the crate-wide `Result` alias

pub mod error;

pub use error::{AdminError, Result};
