use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Hospedagem,
    Passeio,
    VisitaDiaria,
    Creche,
}

impl ServiceType {
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Hospedagem,
        ServiceType::Passeio,
        ServiceType::VisitaDiaria,
        ServiceType::Creche,
    ];

    /// Wire value used by the backend schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Hospedagem => "hospedagem",
            ServiceType::Passeio => "passeio",
            ServiceType::VisitaDiaria => "visita_diaria",
            ServiceType::Creche => "creche",
        }
    }

    pub fn from_str(value: &str) -> Option<ServiceType> {
        ServiceType::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Hospedagem => "Hospedagem",
            ServiceType::Passeio => "Passeio",
            ServiceType::VisitaDiaria => "Visita Diária",
            ServiceType::Creche => "Creche",
        }
    }

    /// Passeio is the single-visit service: flat price, no day count.
    pub fn is_single_visit(&self) -> bool {
        matches!(self, ServiceType::Passeio)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PetSize {
    Pequeno,
    Medio,
    Grande,
    Gigante,
}

impl PetSize {
    pub const ALL: [PetSize; 4] = [
        PetSize::Pequeno,
        PetSize::Medio,
        PetSize::Grande,
        PetSize::Gigante,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PetSize::Pequeno => "pequeno",
            PetSize::Medio => "medio",
            PetSize::Grande => "grande",
            PetSize::Gigante => "gigante",
        }
    }

    pub fn from_str(value: &str) -> Option<PetSize> {
        PetSize::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PetSize::Pequeno => "Pequeno",
            PetSize::Medio => "Médio",
            PetSize::Grande => "Grande",
            PetSize::Gigante => "Gigante",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pendente,
    Confirmado,
    EmAndamento,
    Concluido,
    Cancelado,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pendente => "Pendente",
            BookingStatus::Confirmado => "Confirmado",
            BookingStatus::EmAndamento => "Em andamento",
            BookingStatus::Concluido => "Concluído",
            BookingStatus::Cancelado => "Cancelado",
        }
    }
}

/// One-to-one with an authenticated identity; created by the backend on
/// sign-up from the profile metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: String,
    pub tutor_id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub size: Option<PetSize>,
    pub weight: Option<f64>,
    pub personality: Option<String>,
    pub health_notes: Option<String>,
    pub allergies: Option<String>,
    pub vaccinated: Option<bool>,
    pub neutered: Option<bool>,
    pub photo_url: Option<String>,
}

/// Insert/update payload for the `pets` table; the backend assigns the id.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PetPayload {
    pub tutor_id: String,
    pub name: String,
    pub species: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub size: Option<PetSize>,
    pub weight: Option<f64>,
    pub personality: Option<String>,
    pub health_notes: Option<String>,
    pub allergies: Option<String>,
    pub vaccinated: bool,
    pub neutered: bool,
}

/// Row of `pet_caregivers`. `rating` and `total_reviews` are derived by the
/// data layer; `verified` is set by an out-of-scope admin process.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Caregiver {
    pub id: String,
    pub user_id: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub experience_years: Option<i32>,
    pub home_type: Option<String>,
    pub has_yard: Option<bool>,
    pub max_pets_at_once: Option<i32>,
    pub price_per_day: Option<f64>,
    pub price_per_walk: Option<f64>,
    pub available_services: Option<Vec<ServiceType>>,
    pub accepts_pet_sizes: Option<Vec<PetSize>>,
    pub rating: Option<f64>,
    pub total_reviews: Option<i32>,
    pub verified: Option<bool>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CaregiverPayload {
    pub user_id: String,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub experience_years: Option<i32>,
    pub home_type: Option<String>,
    pub has_yard: bool,
    pub max_pets_at_once: Option<i32>,
    pub price_per_day: Option<f64>,
    pub price_per_walk: Option<f64>,
    pub available_services: Option<Vec<ServiceType>>,
    pub accepts_pet_sizes: Option<Vec<PetSize>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub tutor_id: String,
    pub caregiver_id: String,
    pub pet_id: String,
    pub service_type: ServiceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub special_instructions: Option<String>,
    pub total_price: f64,
    pub status: Option<BookingStatus>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BookingPayload {
    pub tutor_id: String,
    pub caregiver_id: String,
    pub pet_id: String,
    pub service_type: ServiceType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub special_instructions: Option<String>,
    pub total_price: f64,
    pub status: BookingStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub booking_id: String,
    pub sender_id: String,
    pub message: String,
    pub read: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MessagePayload {
    pub booking_id: String,
    pub sender_id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub booking_id: String,
    pub reviewer_id: String,
    pub reviewed_id: String,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewPayload {
    pub booking_id: String,
    pub reviewer_id: String,
    pub reviewed_id: String,
    pub rating: i32,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&ServiceType::VisitaDiaria).unwrap(),
            "\"visita_diaria\""
        );
        assert_eq!(
            serde_json::from_str::<ServiceType>("\"hospedagem\"").unwrap(),
            ServiceType::Hospedagem
        );
    }

    #[test]
    fn booking_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::EmAndamento).unwrap(),
            "\"em_andamento\""
        );
        assert_eq!(
            serde_json::from_str::<BookingStatus>("\"concluido\"").unwrap(),
            BookingStatus::Concluido
        );
    }

    #[test]
    fn enum_string_round_trip() {
        for service in ServiceType::ALL {
            assert_eq!(ServiceType::from_str(service.as_str()), Some(service));
        }
        for size in PetSize::ALL {
            assert_eq!(PetSize::from_str(size.as_str()), Some(size));
        }
        assert_eq!(ServiceType::from_str("banho"), None);
    }

    #[test]
    fn only_passeio_is_single_visit() {
        assert!(ServiceType::Passeio.is_single_visit());
        assert!(!ServiceType::Hospedagem.is_single_visit());
        assert!(!ServiceType::VisitaDiaria.is_single_visit());
        assert!(!ServiceType::Creche.is_single_visit());
    }
}
