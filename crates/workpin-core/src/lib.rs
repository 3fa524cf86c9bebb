pub mod config;
pub mod error;
pub mod types;

pub use config::PartitioningConfig;
pub use error::{ConfigError, PartitionError};
pub use types::*;
