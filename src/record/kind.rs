//! Entity kinds
//!
//! Each kind owns exactly one collection in storage. The storage keys are
//! the ones the original app wrote, so a data directory produced by it is
//! readable as-is.

use std::fmt;

/// The five entity kinds managed by the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Pet,
    AdoptionPet,
    Client,
    PetShop,
    Veterinarian,
}

impl EntityKind {
    /// All kinds, in screen-tab order
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Pet,
        EntityKind::AdoptionPet,
        EntityKind::Client,
        EntityKind::PetShop,
        EntityKind::Veterinarian,
    ];

    /// Storage key of this kind's collection document
    pub fn storage_key(self) -> &'static str {
        match self {
            EntityKind::Pet => "pets",
            EntityKind::AdoptionPet => "petsAdocao",
            EntityKind::Client => "clientes",
            EntityKind::PetShop => "petshops",
            EntityKind::Veterinarian => "veterinarios",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    /// Accepts either the storage key or a short English alias.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pets" | "pet" => Ok(EntityKind::Pet),
            "petsAdocao" | "adoption" => Ok(EntityKind::AdoptionPet),
            "clientes" | "client" => Ok(EntityKind::Client),
            "petshops" | "petshop" => Ok(EntityKind::PetShop),
            "veterinarios" | "vet" => Ok(EntityKind::Veterinarian),
            other => Err(format!("unknown entity kind '{other}'")),
        }
    }
}
