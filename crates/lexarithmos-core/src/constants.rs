//! Shared constants for the Lexarithmos registry.

/// Lexarithmos version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default directory holding all artifacts, relative to the project root.
pub const DEFAULT_DATA_DIR: &str = "Data";

/// Default registry artifact file name.
pub const DEFAULT_REGISTRY_FILE: &str = "number_file.json";

/// Default permutation index artifact file name.
pub const DEFAULT_PERMUTATIONS_FILE: &str = "permutations_file.json";

/// Default variation index artifact file name.
pub const DEFAULT_VARIATIONS_FILE: &str = "variations_file.json";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "lexarithmos.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "LEXARITHMOS_LOG";

/// Filter used when `LEXARITHMOS_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "lexarithmos=info";

/// Indentation used for every JSON artifact.
pub const ARTIFACT_INDENT: &[u8] = b"    ";

/// Numbers at or above this value are reduced again by digit sum.
pub const REDUCTION_THRESHOLD: u64 = 10;
