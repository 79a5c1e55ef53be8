//! # lexarithmos-storage
//!
//! Owns the word-number registry and every artifact written to disk.
//! All writes go through [`artifact::write_json_atomic`], so a crash mid-write
//! never replaces a valid artifact with a partial one.

pub mod artifact;
pub mod registry;

pub use artifact::{read_snapshot, write_json_atomic};
pub use registry::{DeleteOutcome, RegistryStore, UpsertOutcome};
