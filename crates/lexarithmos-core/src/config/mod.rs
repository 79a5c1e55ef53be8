//! Configuration system for Lexarithmos.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod index_config;
pub mod lexarithmos_config;
pub mod storage_config;

pub use index_config::IndexConfig;
pub use lexarithmos_config::{CliOverrides, LexarithmosConfig};
pub use storage_config::StorageConfig;
