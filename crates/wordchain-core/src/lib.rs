//! Foundation crate for wordchain: collection types, the dictionary word
//! set, error enums, configuration, and tracing setup.

pub mod config;
pub mod dictionary;
pub mod errors;
pub mod trace;
pub mod types;

pub use config::WordchainConfig;
pub use dictionary::Dictionary;
pub use errors::{ConfigError, DictionaryError, QueryError};
