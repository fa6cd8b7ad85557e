pub mod analyzers;
pub mod browse;
pub mod config;
pub mod error;
pub mod filters;
pub mod loader;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod session;
