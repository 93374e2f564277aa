use validator::Validate;

use zevo_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::BookingPayload;

/// Checks the payload before any network work: every booking field must
/// be non-empty and the booker email must be well formed.
pub fn validate_payload(payload: &BookingPayload) -> AppResult<()> {
    if !payload.booking.is_complete() {
        return Err(AppError::new(
            ErrorCode::MissingBookingDetails,
            "Missing booking details",
        ));
    }

    payload
        .validate()
        .map_err(|e| AppError::new(ErrorCode::ValidationError, e.to_string()))?;

    Ok(())
}

pub fn email_subject(payload: &BookingPayload) -> String {
    format!("ZEVO Booking: {}", payload.booking.arena)
}

/// Renders the notification body sent to the bookings inbox.
pub fn email_html(payload: &BookingPayload) -> String {
    let booking = &payload.booking;
    format!(
        "<h2>New ZEVO Booking Request</h2>\
         <p><strong>User Email:</strong> {}</p>\
         <p><strong>Arena:</strong> {}</p>\
         <p><strong>Sport:</strong> {}</p>\
         <p><strong>Location:</strong> {}</p>\
         <p><strong>Price:</strong> {}</p>",
        payload.booker_email, booking.arena, booking.sport, booking.location, booking.price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingDetails;

    fn payload() -> BookingPayload {
        BookingPayload {
            booker_email: "sam@example.com".into(),
            booking: BookingDetails {
                arena: "Vega Altas Arena".into(),
                sport: "Padel".into(),
                location: "Margalla, Islamabad".into(),
                price: "Rs. 2,500/hr".into(),
            },
        }
    }

    #[test]
    fn complete_payload_passes() {
        assert!(validate_payload(&payload()).is_ok());
    }

    #[test]
    fn blank_booking_field_is_rejected() {
        let mut p = payload();
        p.booking.price = "   ".into();
        let err = validate_payload(&p).unwrap_err();
        assert!(err.to_string().contains("Missing booking details"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut p = payload();
        p.booker_email = "not-an-email".into();
        assert!(validate_payload(&p).is_err());
    }

    #[test]
    fn html_includes_every_booking_field() {
        let p = payload();
        let html = email_html(&p);
        assert!(html.contains("New ZEVO Booking Request"));
        assert!(html.contains("sam@example.com"));
        assert!(html.contains("Vega Altas Arena"));
        assert!(html.contains("Padel"));
        assert!(html.contains("Margalla, Islamabad"));
        assert!(html.contains("Rs. 2,500/hr"));
    }

    #[test]
    fn subject_names_the_arena() {
        assert_eq!(email_subject(&payload()), "ZEVO Booking: Vega Altas Arena");
    }
}
