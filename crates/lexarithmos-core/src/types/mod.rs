//! Shared data types: registry records, snapshots, and index artifacts.

pub mod collections;
pub mod index;
pub mod record;
pub mod snapshot;

pub use collections::{FxHashMap, FxHashSet};
pub use index::{PermutationEntry, PermutationIndex, PhraseMap, VariationEntry, VariationIndex};
pub use record::{decimal_len, Record};
pub use snapshot::RegistrySnapshot;
