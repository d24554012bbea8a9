// src/dtos/bookingdtos.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_price;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingDto {
    #[validate(range(min = 1, message = "contractor_id must be a positive id"))]
    pub contractor_id: i64,

    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Time slot is required"))]
    pub time: String,

    /// Parsed against the status allow-list in the handler so an unknown
    /// value gets a 400 naming the field; defaults to `upcoming`.
    pub status: Option<String>,

    #[validate(custom = "validate_price")]
    pub price: Option<f64>,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,

    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateBookingDto {
        CreateBookingDto {
            contractor_id: 3,
            date: "2025-01-10".to_string(),
            time: "Morning (9AM-12PM)".to_string(),
            status: Some("upcoming".to_string()),
            price: Some(500.0),
            notes: None,
            user_id: None,
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_contractor_id() {
        let mut dto = valid_dto();
        dto.contractor_id = 0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_empty_date_or_time() {
        let mut dto = valid_dto();
        dto.date = String::new();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.time = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_negative_price() {
        let mut dto = valid_dto();
        dto.price = Some(-5.0);
        assert!(dto.validate().is_err());
    }
}
