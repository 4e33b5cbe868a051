pub mod config;
pub mod elevation;
pub mod errors;
pub mod format;
pub mod runtime;
pub mod safety;
