//! # lexarithmos-core
//!
//! Foundation crate for the Lexarithmos word-number registry.
//! Defines the shared record and index types, errors, config, events,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::LexarithmosConfig;
pub use errors::{LexarithmosError, LexarithmosResult};
pub use traits::PhraseTransformer;
pub use types::{PermutationIndex, Record, RegistrySnapshot, VariationIndex};
