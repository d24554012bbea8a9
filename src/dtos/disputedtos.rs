// src/dtos/disputedtos.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateDisputeDto {
    /// Checked against the dispute-type allow-list in the handler so an
    /// unknown value gets a 400 naming the field.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Dispute type is required"))]
    pub dispute_type: String,

    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10-2000 characters"
    ))]
    pub description: String,

    pub booking_id: Option<i64>,

    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    /// Pattern-checked and lowercased before storage in the handler.
    pub email: Option<String>,

    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::disputemodel::DisputeType;

    #[test]
    fn parses_the_wire_field_named_type() {
        let dto: CreateDisputeDto = serde_json::from_str(
            r#"{"type":"noshow","description":"Contractor never arrived at the site"}"#,
        )
        .unwrap();
        assert_eq!(dto.dispute_type.parse::<DisputeType>(), Ok(DisputeType::Noshow));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn type_outside_the_allow_list_fails_to_parse() {
        assert!("fraudulent".parse::<DisputeType>().is_err());
        assert!("quality".parse::<DisputeType>().is_ok());
    }

    #[test]
    fn rejects_short_description() {
        let dto: CreateDisputeDto =
            serde_json::from_str(r#"{"type":"refund","description":"bad"}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
