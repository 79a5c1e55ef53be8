//! LexarithmosRuntime: one owned instance per data directory.
//!
//! The store is single-writer, so mutations take `&mut self`. Embedders that
//! share a runtime across threads wrap it in a `Mutex`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lexarithmos_analysis::IsopsephyTransformer;
use lexarithmos_core::config::CliOverrides;
use lexarithmos_core::errors::{LexErrorCode, LexarithmosError, LexarithmosResult};
use lexarithmos_core::events::dispatcher::EventDispatcher;
use lexarithmos_core::events::handler::RegistryEventHandler;
use lexarithmos_core::events::types::{
    ErrorEvent, PhraseInsertedEvent, PhraseRemovedEvent, RecordRemovedEvent,
};
use lexarithmos_core::{LexarithmosConfig, PhraseTransformer, Record};
use lexarithmos_storage::{DeleteOutcome, RegistryStore, UpsertOutcome};

/// Options for opening a runtime.
#[derive(Default)]
pub struct RuntimeOptions {
    /// Root that `storage.data_dir` resolves against. Defaults to `.`.
    pub project_root: Option<PathBuf>,
    /// TOML configuration string. When set, replaces layered config loading.
    pub config_toml: Option<String>,
    /// Highest-priority overrides, applied during layered loading.
    pub cli_overrides: Option<CliOverrides>,
    /// Phrase transformer. Defaults to [`IsopsephyTransformer`].
    pub transformer: Option<Box<dyn PhraseTransformer>>,
}

/// The central runtime owning every Lexarithmos subsystem.
pub struct LexarithmosRuntime {
    pub(crate) config: LexarithmosConfig,
    pub(crate) project_root: PathBuf,
    pub(crate) store: RegistryStore,
    pub(crate) dispatcher: EventDispatcher,
    pub(crate) transformer: Box<dyn PhraseTransformer>,
}

impl LexarithmosRuntime {
    /// Resolve configuration and open the registry.
    ///
    /// Only configuration errors fail here. A missing or corrupt registry
    /// artifact opens as an empty registry.
    pub fn open(opts: RuntimeOptions) -> LexarithmosResult<Self> {
        let project_root = opts.project_root.unwrap_or_else(|| PathBuf::from("."));

        let config = match &opts.config_toml {
            Some(toml_str) => LexarithmosConfig::from_toml(toml_str)?,
            None => LexarithmosConfig::load(&project_root, opts.cli_overrides.as_ref())?,
        };

        let registry_path = config.storage.registry_path(&project_root);
        let store = RegistryStore::open(&registry_path);
        tracing::info!(
            path = %registry_path.display(),
            records = store.len(),
            "registry opened"
        );

        Ok(Self {
            config,
            project_root,
            store,
            dispatcher: EventDispatcher::new(),
            transformer: opts
                .transformer
                .unwrap_or_else(|| Box::new(IsopsephyTransformer)),
        })
    }

    pub fn config(&self) -> &LexarithmosConfig {
        &self.config
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn store(&self) -> &RegistryStore {
        &self.store
    }

    pub fn registry_path(&self) -> &Path {
        self.store.path()
    }

    pub fn permutations_path(&self) -> PathBuf {
        self.config.storage.permutations_path(&self.project_root)
    }

    pub fn variations_path(&self) -> PathBuf {
        self.config.storage.variations_path(&self.project_root)
    }

    /// Register an observer for registry and index events.
    pub fn register_handler(&mut self, handler: Arc<dyn RegistryEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Look up the record stored under `key`.
    pub fn lookup(&self, key: u64) -> Option<&Record> {
        self.store.get(key)
    }

    /// Insert `phrase` under `key_chain[0]`, storing the rest as subdivisions
    /// when the key is new. Does not regenerate the indexes.
    pub fn upsert(&mut self, phrase: &str, key_chain: &[u64]) -> LexarithmosResult<UpsertOutcome> {
        let outcome = self
            .store
            .upsert(phrase, key_chain)
            .map_err(LexarithmosError::from);
        let outcome = self.report(outcome)?;

        if outcome != UpsertOutcome::AlreadyPresent {
            self.dispatcher.emit_phrase_inserted(&PhraseInsertedEvent {
                key: key_chain[0],
                phrase: phrase.trim().to_string(),
                created_record: outcome == UpsertOutcome::Created,
            });
        }
        Ok(outcome)
    }

    /// Remove `phrase` from `key`. Does not regenerate the indexes.
    pub fn delete(&mut self, phrase: &str, key: u64) -> LexarithmosResult<DeleteOutcome> {
        let outcome = self.store.delete(phrase, key).map_err(LexarithmosError::from);
        let outcome = self.report(outcome)?;

        self.dispatcher.emit_phrase_removed(&PhraseRemovedEvent {
            key,
            phrase: phrase.trim().to_string(),
        });
        if outcome == DeleteOutcome::RecordRemoved {
            self.dispatcher.emit_record_removed(&RecordRemovedEvent { key });
        }
        Ok(outcome)
    }

    /// Forward a failure to the `on_error` handlers and pass the result through.
    pub(crate) fn report<T>(&self, result: LexarithmosResult<T>) -> LexarithmosResult<T> {
        if let Err(e) = &result {
            tracing::debug!(code = e.error_code(), error = %e, "operation failed");
            self.dispatcher.emit_error(&ErrorEvent {
                message: e.to_string(),
                error_code: e.error_code().to_string(),
            });
        }
        result
    }
}
