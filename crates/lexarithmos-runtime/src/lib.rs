//! # lexarithmos-runtime
//!
//! Owns the configuration, the registry store, the event dispatcher and the
//! phrase transformer, and drives the mutate → regenerate-indexes cycle.

pub mod indexes;
pub mod process;
pub mod runtime;

pub use indexes::IndexSummary;
pub use process::{Action, Change, ProcessOutcome};
pub use runtime::{LexarithmosRuntime, RuntimeOptions};
