//! Entity models
//!
//! Flat field shapes for the five entity kinds, matching the documents the
//! original screens wrote: Portuguese wire keys, string/number values, no
//! nested object graphs. Fields the app added over time (`tutor`, the
//! image reference) default on read instead of failing, which is the only
//! schema-evolution mechanism the documents support.

use std::fmt;
use std::fmt::Debug;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};

use super::{EntityKind, RecordId};

/// Field shape of one entity kind
///
/// The codec and the engine are generic over this trait; `KIND` pins the
/// collection a shape belongs to.
pub trait EntityFields: Serialize + DeserializeOwned + Clone + Debug {
    const KIND: EntityKind;
}

/// One stored entity: its collection-unique id plus its flat fields
///
/// The fields are flattened into the record on the wire, so a persisted
/// pet reads `{"id":…,"nome":…,"raca":…}`, exactly the layout the
/// original app produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<F> {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: F,
}

impl<F: EntityFields> Record<F> {
    /// Entity kind of this record's collection
    pub fn kind(&self) -> EntityKind {
        F::KIND
    }
}

// =============================================================================
// Field Shapes
// =============================================================================

/// A pet owned by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetFields {
    pub nome: String,
    pub raca: String,
    #[serde(deserialize_with = "age_from_number_or_string")]
    pub idade: u32,

    /// Opaque image URI picked on the form screen; never interpreted here
    #[serde(default)]
    pub imagem: Option<String>,

    /// Added after the first release; older documents lack it
    #[serde(default)]
    pub tutor: String,
}

impl EntityFields for PetFields {
    const KIND: EntityKind = EntityKind::Pet;
}

/// A pet listed for adoption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionPetFields {
    pub nome: String,
    #[serde(default)]
    pub raca: String,
    #[serde(default, deserialize_with = "age_from_number_or_string")]
    pub idade: u32,
    #[serde(default)]
    pub imagem: Option<String>,
}

impl EntityFields for AdoptionPetFields {
    const KIND: EntityKind = EntityKind::AdoptionPet;
}

/// A client of the pet shop
///
/// The client's pet is referenced by name only; there is no id-level link
/// between collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientFields {
    pub nome: String,
    #[serde(rename = "nomePet")]
    pub nome_pet: String,
    pub cpf: String,
    pub telefone: String,
    #[serde(default)]
    pub endereco: String,
}

impl EntityFields for ClientFields {
    const KIND: EntityKind = EntityKind::Client;
}

/// A pet shop with its selected products and services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetShopFields {
    pub nome: String,
    #[serde(default)]
    pub produtos: Vec<String>,
    #[serde(default)]
    pub servicos: Vec<String>,
}

impl EntityFields for PetShopFields {
    const KIND: EntityKind = EntityKind::PetShop;
}

/// A veterinarian with an attendance schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VeterinarianFields {
    pub nome: String,
    pub horario: String,
    pub telefone: String,
    #[serde(default)]
    pub servicos: Vec<String>,
}

impl EntityFields for VeterinarianFields {
    const KIND: EntityKind = EntityKind::Veterinarian;
}

// =============================================================================
// Lenient Decoding
// =============================================================================

/// Accept an age as a JSON number or a numeric string.
///
/// The original forms persisted the raw text-input value, so legacy
/// documents carry `"idade":"3"` next to newer ones with `"idade":3`.
/// Both must decode; the field always serializes back as a number.
fn age_from_number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct AgeVisitor;

    impl de::Visitor<'_> for AgeVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an age as a non-negative number or numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            v.trim().parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(AgeVisitor)
}
