#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hotelbook::libs::booking::{BookingForm, Guest, Money, Stay};
    use hotelbook::libs::error::{BookingError, ValidationError};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stay(check_in: &str, check_out: &str) -> Stay {
        Stay::new(date(check_in), date(check_out)).unwrap()
    }

    fn filled_form() -> BookingForm {
        BookingForm {
            room_id: Some(1),
            name: "Jane Doe".to_string(),
            phone: "5551234567".to_string(),
            email: "jane@example.com".to_string(),
            check_in: "2024-06-01".to_string(),
            check_out: "2024-06-05".to_string(),
        }
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(10_000).to_string(), "100.00");
        assert_eq!(Money::from_cents(9_005).to_string(), "90.05");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-250).to_string(), "-2.50");
    }

    #[test]
    fn test_money_serializes_as_cents() {
        assert_eq!(serde_json::to_string(&Money::from_cents(15_000)).unwrap(), "15000");
    }

    #[test]
    fn test_stay_requires_check_out_after_check_in() {
        assert_eq!(
            Stay::new(date("2024-06-05"), date("2024-06-05")).unwrap_err(),
            BookingError::InvalidStay {
                check_in: date("2024-06-05"),
                check_out: date("2024-06-05"),
            }
        );
        assert!(Stay::new(date("2024-06-05"), date("2024-06-01")).is_err());
        assert_eq!(stay("2024-06-01", "2024-06-05").nights(), 4);
    }

    #[test]
    fn test_stay_overlap_is_half_open() {
        let existing = stay("2024-06-01", "2024-06-05");

        assert!(existing.overlaps(&stay("2024-06-04", "2024-06-10")));
        assert!(existing.overlaps(&stay("2024-06-02", "2024-06-03")));
        assert!(existing.overlaps(&stay("2024-05-20", "2024-06-20")));
        assert!(existing.overlaps(&existing));

        assert!(!existing.overlaps(&stay("2024-06-05", "2024-06-10")));
        assert!(!existing.overlaps(&stay("2024-05-25", "2024-06-01")));
        assert!(!existing.overlaps(&stay("2024-05-01", "2024-05-05")));
    }

    #[test]
    fn test_stay_contains() {
        let s = stay("2024-06-01", "2024-06-05");
        assert!(s.contains(date("2024-06-01")));
        assert!(s.contains(date("2024-06-04")));
        assert!(!s.contains(date("2024-06-05")));
        assert!(!s.contains(date("2024-05-31")));
    }

    #[test]
    fn test_form_produces_request() {
        let request = filled_form().validate().unwrap();

        assert_eq!(request.room_id, 1);
        assert_eq!(request.guest, Guest::new("Jane Doe", "5551234567", "jane@example.com"));
        assert_eq!(request.check_in, date("2024-06-01"));
        assert_eq!(request.check_out, date("2024-06-05"));
    }

    #[test]
    fn test_form_checks_values_as_typed() {
        let mut form = filled_form();
        form.phone = " 5551234567 ".to_string();
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPhone);

        let mut form = filled_form();
        form.email = " jane@example.com".to_string();
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidEmail);

        let mut form = filled_form();
        form.check_in = "2024-06-01 ".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidDate("2024-06-01 ".to_string())
        );
    }

    #[test]
    fn test_form_requires_room() {
        let mut form = filled_form();
        form.room_id = None;
        form.email = "broken".to_string();

        assert_eq!(form.validate().unwrap_err(), ValidationError::NoRoomSelected);
    }

    #[test]
    fn test_form_requires_every_field() {
        let mut form = filled_form();
        form.phone = String::new();
        form.email = "broken".to_string();

        assert_eq!(form.validate().unwrap_err(), ValidationError::MissingField("phone"));
    }

    #[test]
    fn test_form_checks_email_before_phone() {
        let mut form = filled_form();
        form.email = "broken".to_string();
        form.phone = "12".to_string();

        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidEmail);

        form.email = "jane@example.com".to_string();
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPhone);
    }

    #[test]
    fn test_form_rejects_bad_dates() {
        let mut form = filled_form();
        form.check_out = "2024-02-30".to_string();

        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidDate("2024-02-30".to_string())
        );
    }

    #[test]
    fn test_form_leaves_date_order_to_storage() {
        let mut form = filled_form();
        form.check_in = "2024-06-05".to_string();
        form.check_out = "2024-06-01".to_string();

        assert!(form.validate().is_ok());
    }
}
