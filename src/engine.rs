//! Engine Module
//!
//! The reconciliation engine coordinating codec, storage, and change
//! notification.
//!
//! ## Responsibilities
//! - Load whole collections from the backend
//! - Run create/update/delete as full read-modify-write cycles
//! - Assign record identity at creation time
//! - Fire the reload hook after a successful persist
//!
//! ## Reconciliation Model
//!
//! Every mutation reloads its collection immediately before mutating it:
//! no in-memory copy of a collection is ever trusted across mutations.
//! The cycle is load → mutate → persist → notify, with no suspension
//! point between load and persist, so two writers against the same key
//! cannot interleave within one process as long as mutations are issued
//! from one call stack at a time (which the screen flow guarantees).
//!
//! Ordering: create appends (new records sort last), update replaces in
//! place, delete preserves the relative order of the remaining records.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{PetbaseError, Result};
use crate::notify::{Change, ChangeEvent, ReloadHook};
use crate::record::codec::{decode_collection, encode_collection};
use crate::record::{EntityFields, IdGenerator, Record, RecordId};
use crate::storage::{FileBackend, MemoryBackend, StorageBackend};
use crate::validate::Validate;

/// The collection store engine
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Key-value backend holding one document per collection
    backend: Arc<dyn StorageBackend>,

    /// Monotonic id source for created records
    ids: IdGenerator,
}

impl Engine {
    /// Open a file-backed engine with the given config
    pub fn open(config: Config) -> Result<Self> {
        let backend = FileBackend::open(&config.data_dir, config.sync_writes)?;
        Ok(Self::with_backend(Arc::new(backend), config))
    }

    /// Volatile engine over an in-memory backend (tests, previews)
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()), Config::default())
    }

    /// Engine over an arbitrary backend
    pub fn with_backend(backend: Arc<dyn StorageBackend>, config: Config) -> Self {
        Self {
            config,
            backend,
            ids: IdGenerator::new(),
        }
    }

    // =========================================================================
    // Collection Access
    // =========================================================================

    /// Load the full collection for `F`.
    ///
    /// An absent document reads as an empty collection; a malformed one is
    /// a [`Decode`](PetbaseError::Decode) error.
    pub fn list<F: EntityFields>(&self) -> Result<Vec<Record<F>>> {
        let key = F::KIND.storage_key();
        let raw = self.backend.get(key)?;
        decode_collection(raw.as_deref())
    }

    /// Persist `records` as the new full collection for `F`.
    fn save<F: EntityFields>(&self, records: &[Record<F>]) -> Result<()> {
        let key = F::KIND.storage_key();
        let raw = encode_collection(records, self.config.pretty)?;

        if let Err(e) = self.backend.set(key, &raw) {
            warn!(key, error = %e, "persist failed, collection unchanged");
            return Err(e);
        }

        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a record from already-validated fields.
    ///
    /// Assigns a fresh id, appends to the collection, persists, then fires
    /// `hook`. Returns the stored record, id included.
    pub fn create<F: EntityFields>(&self, fields: F, hook: &ReloadHook) -> Result<Record<F>> {
        // Step 1: Fresh snapshot of the persisted collection
        let mut records = self.list::<F>()?;

        // Step 2: Assign identity and append
        let record = Record {
            id: self.ids.next_id(),
            fields,
        };
        records.push(record.clone());

        // Step 3: Persist, then notify
        self.save(&records)?;
        self.committed(
            ChangeEvent {
                kind: F::KIND,
                change: Change::Created(record.id),
            },
            hook,
        );

        Ok(record)
    }

    /// Replace the stored record carrying `record.id`.
    ///
    /// The record keeps its position in the collection. A missing target
    /// is a [`NotFound`](PetbaseError::NotFound) error and nothing is
    /// written.
    pub fn update<F: EntityFields>(&self, record: Record<F>, hook: &ReloadHook) -> Result<Record<F>> {
        let mut records = self.list::<F>()?;

        let Some(position) = records.iter().position(|r| r.id == record.id) else {
            return Err(PetbaseError::NotFound {
                key: F::KIND.storage_key().to_string(),
                id: record.id,
            });
        };
        records[position] = record.clone();

        self.save(&records)?;
        self.committed(
            ChangeEvent {
                kind: F::KIND,
                change: Change::Updated(record.id),
            },
            hook,
        );

        Ok(record)
    }

    /// Remove the record carrying `id`, if present.
    ///
    /// Returns whether a record was removed. Deleting an absent id is a
    /// no-op: nothing is written and the hook does not fire, so a repeated
    /// delete cannot disturb the collection.
    pub fn delete<F: EntityFields>(&self, id: RecordId, hook: &ReloadHook) -> Result<bool> {
        let mut records = self.list::<F>()?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!(key = F::KIND.storage_key(), %id, "delete target absent, no-op");
            return Ok(false);
        }

        self.save(&records)?;
        self.committed(
            ChangeEvent {
                kind: F::KIND,
                change: Change::Deleted(id),
            },
            hook,
        );

        Ok(true)
    }

    // =========================================================================
    // Validated Mutations
    // =========================================================================

    /// [`create`](Self::create), preceded by the field schema.
    ///
    /// Validation failures surface before any storage IO.
    pub fn create_validated<F>(&self, fields: F, hook: &ReloadHook) -> Result<Record<F>>
    where
        F: EntityFields + Validate,
    {
        fields.validate().map_err(PetbaseError::Validation)?;
        self.create(fields, hook)
    }

    /// [`update`](Self::update), preceded by the field schema.
    pub fn update_validated<F>(&self, record: Record<F>, hook: &ReloadHook) -> Result<Record<F>>
    where
        F: EntityFields + Validate,
    {
        record.fields.validate().map_err(PetbaseError::Validation)?;
        self.update(record, hook)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Log a committed mutation and fire the reload hook once.
    fn committed(&self, event: ChangeEvent, hook: &ReloadHook) {
        debug!(%event, "mutation committed");
        hook.fire();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
