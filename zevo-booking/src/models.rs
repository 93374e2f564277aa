use serde::{Deserialize, Serialize};
use validator::Validate;

/// Wire format of a booking request, as posted by the booking page.
#[derive(Debug, Deserialize, Validate)]
pub struct BookingPayload {
    #[validate(email(message = "invalid email format"))]
    pub booker_email: String,
    pub booking: BookingDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub arena: String,
    pub sport: String,
    pub location: String,
    pub price: String,
}

impl BookingDetails {
    pub fn is_complete(&self) -> bool {
        ![&self.arena, &self.sport, &self.location, &self.price]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}
