//! Contains configuration and formats used by the solve command.

pub mod config;
pub mod formats;
