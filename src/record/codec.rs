//! Collection codec
//!
//! Encoding and decoding of whole collections to the persisted document
//! format.
//!
//! ## Document Format
//!
//! One JSON array of flat records per storage key:
//!
//! ```text
//! [
//!   {"id": 1700000000000, "nome": "Rex", "raca": "Labrador", "idade": 3},
//!   {"id": 1700000000001, "nome": "Mia", "raca": "Siamês",   "idade": 2}
//! ]
//! ```
//!
//! No version field. An absent document decodes as an empty collection;
//! a present but malformed document is a [`Decode`](crate::PetbaseError::Decode)
//! error, never an empty collection — the original app conflated the two,
//! which masked real corruption.

use crate::error::{PetbaseError, Result};
use crate::record::{EntityFields, Record};

/// Decode the raw document for `F`'s collection.
///
/// `raw` is the backend's `get` result: `None` means the collection was
/// never written and reads as empty.
pub fn decode_collection<F: EntityFields>(raw: Option<&str>) -> Result<Vec<Record<F>>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    serde_json::from_str(raw).map_err(|e| PetbaseError::Decode {
        key: F::KIND.storage_key().to_string(),
        reason: e.to_string(),
    })
}

/// Encode a collection to its persisted document.
pub fn encode_collection<F: EntityFields>(records: &[Record<F>], pretty: bool) -> Result<String> {
    let result = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };

    result.map_err(|e| PetbaseError::Encode {
        key: F::KIND.storage_key().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{PetFields, RecordId};
    use crate::PetbaseError;

    fn rex() -> Record<PetFields> {
        Record {
            id: RecordId(1),
            fields: PetFields {
                nome: "Rex".to_string(),
                raca: "Labrador".to_string(),
                idade: 3,
                imagem: None,
                tutor: "Ana".to_string(),
            },
        }
    }

    #[test]
    fn absent_document_decodes_as_empty() {
        let records: Vec<Record<PetFields>> = decode_collection(None).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn malformed_document_is_a_decode_error_not_empty() {
        let result = decode_collection::<PetFields>(Some("{not json"));
        match result {
            Err(PetbaseError::Decode { key, .. }) => assert_eq!(key, "pets"),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        // Valid JSON, but an object instead of an array
        let result = decode_collection::<PetFields>(Some(r#"{"id":1}"#));
        assert!(matches!(result, Err(PetbaseError::Decode { .. })));
    }

    #[test]
    fn encode_decode_preserves_order_and_values() {
        let mut second = rex();
        second.id = RecordId(2);
        second.fields.nome = "Mia".to_string();

        let collection = vec![rex(), second];
        let raw = encode_collection(&collection, false).unwrap();
        let back: Vec<Record<PetFields>> = decode_collection(Some(&raw)).unwrap();

        assert_eq!(back, collection);
    }

    #[test]
    fn pretty_encoding_round_trips() {
        let collection = vec![rex()];
        let raw = encode_collection(&collection, true).unwrap();
        assert!(raw.contains('\n'));

        let back: Vec<Record<PetFields>> = decode_collection(Some(&raw)).unwrap();
        assert_eq!(back, collection);
    }
}
