//! # Petbase
//!
//! The local persistence core of a pet-management app:
//! - Typed collections for five entity kinds, persisted as JSON documents
//! - Pluggable key-value storage (file-backed or in-memory)
//! - Full read-modify-write reconciliation for create/update/delete
//! - Per-field validation schemas matching the app's forms
//! - A reload hook so list screens refresh after a mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 UI Screens (external)                        │
//! │              (list screen + form screen)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Engine                                  │
//! │        (validate → load → mutate → persist → notify)         │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!     ┌─────────────┐                   ┌───────────────┐
//!     │    Codec    │                   │  ReloadHook   │
//!     │ (JSON array)│                   │  (optional)   │
//!     └──────┬──────┘                   └───────────────┘
//!            │
//!            ▼
//!     ┌──────────────────┐
//!     │  StorageBackend  │
//!     │ (file / memory)  │
//!     └──────────────────┘
//! ```
//!
//! Each entity kind owns exactly one collection document; every mutation
//! reloads that document, edits it in memory, and writes it back whole.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod storage;
pub mod record;
pub mod notify;
pub mod validate;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PetbaseError, Result};
pub use config::Config;
pub use engine::Engine;
pub use notify::{Change, ChangeEvent, ReloadHook};
pub use record::{
    AdoptionPetFields, ClientFields, EntityFields, EntityKind, PetFields, PetShopFields, Record,
    RecordId, VeterinarianFields,
};
pub use validate::{Validate, ValidationErrors};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of petbase
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
