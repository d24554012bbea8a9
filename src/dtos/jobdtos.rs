// src/dtos/jobdtos.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::jobmodel::JobUrgency;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobDto {
    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    pub title: Option<String>,

    /// Either `service` or the legacy `category` alias must be present.
    #[validate(length(min = 2, max = 50, message = "Service must be between 2-50 characters"))]
    pub service: Option<String>,

    #[validate(length(min = 2, max = 50, message = "Category must be between 2-50 characters"))]
    pub category: Option<String>,

    #[validate(length(
        min = 10,
        max = 2000,
        message = "Description must be between 10-2000 characters"
    ))]
    pub description: String,

    #[validate(length(min = 2, max = 100, message = "Location must be between 2-100 characters"))]
    pub location: String,

    pub urgency: Option<JobUrgency>,

    #[validate(length(max = 50, message = "Budget must be at most 50 characters"))]
    pub budget: Option<String>,

    pub user_id: Option<Uuid>,
}

impl CreateJobDto {
    /// `category` is accepted as an alias for `service` and normalized away.
    pub fn normalized_service(&self) -> Option<String> {
        self.service
            .as_deref()
            .or(self.category.as_deref())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_dto() -> CreateJobDto {
        CreateJobDto {
            title: None,
            service: None,
            category: None,
            description: "Kitchen sink is leaking and needs a new trap installed.".to_string(),
            location: "HSR Layout, Bengaluru".to_string(),
            urgency: None,
            budget: None,
            user_id: None,
        }
    }

    #[test]
    fn service_field_wins_over_category() {
        let mut dto = base_dto();
        dto.service = Some("Plumbing".to_string());
        dto.category = Some("Electrical".to_string());
        assert_eq!(dto.normalized_service(), Some("Plumbing".to_string()));
    }

    #[test]
    fn category_is_accepted_as_alias() {
        let mut dto = base_dto();
        dto.category = Some("  Plumbing ".to_string());
        assert_eq!(dto.normalized_service(), Some("Plumbing".to_string()));
    }

    #[test]
    fn missing_both_yields_none() {
        assert_eq!(base_dto().normalized_service(), None);
    }
}
