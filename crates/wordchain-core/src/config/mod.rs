//! Configuration for wordchain.

pub mod wordchain_config;

pub use wordchain_config::WordchainConfig;
