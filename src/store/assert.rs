use std::convert::TryFrom;

use chrono::NaiveDate;

use crate::{
    error::DomainError,
    models::{
        appointments::{BookingRequest, NewAppointment},
        availability::WEEKDAYS,
        catalog::Catalog,
        prescriptions::NewPrescription,
    },
};

pub fn assert_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("'{}' is required", field)));
    }
    Ok(())
}

pub fn assert_booking(
    catalog: &Catalog,
    booking: BookingRequest,
) -> Result<NewAppointment, DomainError> {
    assert_non_empty("doctor_id", &booking.doctor_id)?;
    assert_non_empty("date", &booking.date)?;
    assert_non_empty("time", &booking.time)?;

    let date = NaiveDate::parse_from_str(booking.date.trim(), "%Y-%m-%d").map_err(|_| {
        DomainError::Validation(format!("Date '{}' is not YYYY-MM-DD", booking.date))
    })?;
    let time = booking.time.trim();
    if !catalog.has_slot(time) {
        return Err(DomainError::Validation(format!(
            "'{}' is not a bookable time slot",
            time
        )));
    }
    let doctor = catalog
        .doctor(booking.doctor_id.trim())
        .ok_or(DomainError::NotFound("doctor"))?;

    Ok(NewAppointment {
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        specialty: doctor.specialty.clone(),
        patient_name: booking.patient_name,
        date,
        time: time.to_string(),
    })
}

pub fn assert_prescription(data: &NewPrescription) -> Result<(), DomainError> {
    assert_non_empty("diagnosis", &data.diagnosis)?;
    assert_non_empty("medicines", &data.medicines)?;
    Ok(())
}

pub fn assert_day_index(day_index: i64) -> Result<usize, DomainError> {
    usize::try_from(day_index)
        .ok()
        .filter(|i| *i < WEEKDAYS)
        .ok_or(DomainError::Range(day_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(doctor_id: &str, date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            doctor_id: doctor_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            patient_name: "John Doe".to_string(),
        }
    }

    #[test]
    fn booking_copies_doctor_details() {
        let catalog = Catalog::default();
        let data = assert_booking(&catalog, booking("1", "2025-12-01", "09:00 AM")).unwrap();
        assert_eq!(data.doctor_name, "Dr. Sarah Johnson");
        assert_eq!(data.specialty, "Cardiologist");
        assert_eq!(data.date, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(data.time, "09:00 AM");
    }

    #[test]
    fn empty_fields_are_validation_errors() {
        let catalog = Catalog::default();
        for req in vec![
            booking("", "2025-12-01", "09:00 AM"),
            booking("1", "", "09:00 AM"),
            booking("1", "2025-12-01", "  "),
        ] {
            assert!(matches!(
                assert_booking(&catalog, req),
                Err(DomainError::Validation(_))
            ));
        }
    }

    #[test]
    fn past_dates_are_accepted() {
        let catalog = Catalog::default();
        assert!(assert_booking(&catalog, booking("2", "1999-01-01", "04:30 PM")).is_ok());
    }

    #[test]
    fn unknown_doctor_and_slot() {
        let catalog = Catalog::default();
        assert_eq!(
            assert_booking(&catalog, booking("9", "2025-12-01", "09:00 AM")).unwrap_err(),
            DomainError::NotFound("doctor")
        );
        assert!(matches!(
            assert_booking(&catalog, booking("1", "2025-12-01", "01:00 PM")),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            assert_booking(&catalog, booking("1", "12/01/2025", "09:00 AM")),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn day_index_bounds() {
        assert_eq!(assert_day_index(0), Ok(0));
        assert_eq!(assert_day_index(6), Ok(6));
        assert_eq!(assert_day_index(7), Err(DomainError::Range(7)));
        assert_eq!(assert_day_index(-1), Err(DomainError::Range(-1)));
    }
}
