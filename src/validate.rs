//! Field validation
//!
//! The form schemas of the original app, as a `Validate` impl per field
//! shape. Validation runs strictly before the reconciliation engine: a
//! shape that fails here never reaches storage. Failures are reported
//! per-field so a form can render them inline; messages are the
//! user-visible strings the app displayed.
//!
//! Input masking (CPF dots, phone parentheses) is a form concern and is
//! not done here — validation only checks the already-masked format.

use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::record::{
    AdoptionPetFields, ClientFields, PetFields, PetShopFields, VeterinarianFields,
};

const REQUIRED: &str = "Campo obrigatório!";
const INVALID_CPF: &str = "CPF inválido";
// The client and veterinarian forms worded this differently
const INVALID_PHONE_CLIENT: &str = "Telefone inválido";
const INVALID_PHONE_VET: &str = "Formato de telefone inválido";
const INVALID_SCHEDULE: &str = "Formato de horário inválido";

/// One failed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field, as the form knows it
    pub field: &'static str,
    pub message: &'static str,
}

/// All failures of one validation pass, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    fn require(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, REQUIRED);
        }
    }

    /// Require `value` and, when present, match it against `pattern`
    fn require_matching(
        &mut self,
        field: &'static str,
        value: &str,
        pattern: &Regex,
        message: &'static str,
    ) {
        if value.trim().is_empty() {
            self.push(field, REQUIRED);
        } else if !pattern.is_match(value) {
            self.push(field, message);
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Field shapes that carry a form schema
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

// =============================================================================
// Patterns
// =============================================================================

fn cpf_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("valid cpf pattern"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("valid phone pattern"))
}

fn schedule_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid schedule pattern")
    })
}

// =============================================================================
// Schemas
// =============================================================================

impl Validate for PetFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("nome", &self.nome);
        errors.require("raca", &self.raca);
        errors.into_result()
    }
}

impl Validate for AdoptionPetFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("nome", &self.nome);
        errors.require("raca", &self.raca);
        errors.into_result()
    }
}

impl Validate for ClientFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("nome", &self.nome);
        errors.require("nomePet", &self.nome_pet);
        errors.require_matching("cpf", &self.cpf, cpf_pattern(), INVALID_CPF);
        errors.require_matching(
            "telefone",
            &self.telefone,
            phone_pattern(),
            INVALID_PHONE_CLIENT,
        );
        errors.require("endereco", &self.endereco);
        errors.into_result()
    }
}

impl Validate for PetShopFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("nome", &self.nome);
        errors.into_result()
    }
}

impl Validate for VeterinarianFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require("nome", &self.nome);
        errors.require_matching(
            "horario",
            &self.horario,
            schedule_pattern(),
            INVALID_SCHEDULE,
        );
        errors.require_matching("telefone", &self.telefone, phone_pattern(), INVALID_PHONE_VET);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_client() -> ClientFields {
        ClientFields {
            nome: "Ana".to_string(),
            nome_pet: "Rex".to_string(),
            cpf: "123.456.789-00".to_string(),
            telefone: "(11) 91234-5678".to_string(),
            endereco: "Rua A, 10".to_string(),
        }
    }

    #[test]
    fn valid_client_passes() {
        assert!(valid_client().validate().is_ok());
    }

    #[test]
    fn missing_required_fields_report_per_field() {
        let mut client = valid_client();
        client.nome = String::new();
        client.endereco = "   ".to_string();

        let errors = client.validate().unwrap_err();
        assert_eq!(errors.message_for("nome"), Some(REQUIRED));
        assert_eq!(errors.message_for("endereco"), Some(REQUIRED));
        assert_eq!(errors.message_for("cpf"), None);
    }

    #[test]
    fn malformed_cpf_is_rejected() {
        let mut client = valid_client();
        client.cpf = "12345678900".to_string();

        let errors = client.validate().unwrap_err();
        assert_eq!(errors.message_for("cpf"), Some(INVALID_CPF));
    }

    #[test]
    fn phone_accepts_four_or_five_digit_prefix() {
        let mut client = valid_client();
        client.telefone = "(11) 1234-5678".to_string();
        assert!(client.validate().is_ok());

        client.telefone = "(11) 91234-5678".to_string();
        assert!(client.validate().is_ok());

        client.telefone = "11 91234-5678".to_string();
        assert!(client.validate().is_err());
    }

    #[test]
    fn phone_message_matches_each_form() {
        let mut client = valid_client();
        client.telefone = "999".to_string();
        let errors = client.validate().unwrap_err();
        assert_eq!(errors.message_for("telefone"), Some(INVALID_PHONE_CLIENT));

        let vet = VeterinarianFields {
            nome: "Dr. Sousa".to_string(),
            horario: "08:30".to_string(),
            telefone: "999".to_string(),
            servicos: vec![],
        };
        let errors = vet.validate().unwrap_err();
        assert_eq!(errors.message_for("telefone"), Some(INVALID_PHONE_VET));
    }

    #[test]
    fn schedule_is_24h_clock() {
        let vet = |horario: &str| VeterinarianFields {
            nome: "Dr. Sousa".to_string(),
            horario: horario.to_string(),
            telefone: "(11) 1234-5678".to_string(),
            servicos: vec![],
        };

        assert!(vet("08:30").validate().is_ok());
        assert!(vet("8:30").validate().is_ok());
        assert!(vet("23:59").validate().is_ok());
        assert!(vet("24:00").validate().is_err());
        assert!(vet("12:60").validate().is_err());
        assert!(vet("manhã").validate().is_err());
    }

    #[test]
    fn pet_requires_name_and_breed() {
        let pet = PetFields {
            nome: String::new(),
            raca: String::new(),
            idade: 3,
            imagem: None,
            tutor: String::new(),
        };

        let errors = pet.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 2);
    }
}
