// src/dtos/contractordtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ContractorQueryDto {
    pub service: Option<String>,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateContractorDto {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2-100 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 50, message = "Service must be between 2-50 characters"))]
    pub service: String,

    #[validate(length(min = 2, max = 100, message = "Location must be between 2-100 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 20, message = "Price must be between 1-20 characters"))]
    pub price: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 16, message = "Image glyph must be at most 16 characters"))]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_listing_fields() {
        let dto = CreateContractorDto {
            name: "R".to_string(),
            service: "Plumbing".to_string(),
            location: "Koramangala, Bengaluru".to_string(),
            price: "₹299/hr".to_string(),
            description: None,
            image: None,
        };
        assert!(dto.validate().is_err());
    }
}
