// src/dtos/assistantdtos.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct ChatDto {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Message must be between 1-1000 characters"
    ))]
    pub message: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDescriptionDto {
    #[validate(length(min = 1, max = 200, message = "Service must be between 1-200 characters"))]
    pub service: String,

    #[validate(length(min = 1, max = 200, message = "Location must be between 1-200 characters"))]
    pub location: String,

    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_oversized_chat_message() {
        let dto = ChatDto {
            message: "x".repeat(1001),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_empty_chat_message() {
        let dto = ChatDto {
            message: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
