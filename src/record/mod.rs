//! Record Module
//!
//! The typed entity layer: record identity, entity kinds, the five field
//! shapes used by the pet-management screens, and the JSON codec for whole
//! collections.
//!
//! One generic [`Record`] replaces the five near-duplicate ad hoc shapes
//! the screens used to pass around.

pub mod codec;
mod id;
mod kind;
mod model;

pub use id::{IdGenerator, RecordId};
pub use kind::EntityKind;
pub use model::{
    AdoptionPetFields, ClientFields, EntityFields, PetFields, PetShopFields, Record,
    VeterinarianFields,
};
