pub mod scope;
pub mod modifiers;
pub mod verification;
pub mod config;
pub mod error;
pub mod client;

// Re-export commonly used items
pub use scope::*;
pub use modifiers::*;
pub use verification::*;
pub use config::ClientConfig;
pub use error::{MartianError, ParseError, Result};
pub use client::{Client, Logger, JSON_CONTENT_TYPE};
