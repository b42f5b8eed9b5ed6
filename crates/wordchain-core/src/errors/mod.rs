//! Error handling for wordchain.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod dictionary_error;
pub mod query_error;

pub use config_error::ConfigError;
pub use dictionary_error::DictionaryError;
pub use query_error::QueryError;
