// src/dtos/reviewdtos.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewDto {
    #[validate(range(min = 1, message = "booking_id must be a positive id"))]
    pub booking_id: i64,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub comment: Option<String>,

    pub user_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_rating() {
        let dto = CreateReviewDto {
            booking_id: 1,
            rating: 6,
            comment: None,
            user_id: None,
        };
        assert!(dto.validate().is_err());

        let dto = CreateReviewDto {
            booking_id: 1,
            rating: 0,
            comment: None,
            user_id: None,
        };
        assert!(dto.validate().is_err());
    }
}
