use crate::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointStatus {
    Scheduled,
    Completed,
    Cancelled,
}

pub const APPOINT_STATUS_UPCOMING: &str = "upcoming";
pub const APPOINT_STATUS_PENDING: &str = "pending";
pub const APPOINT_STATUS_COMPLETED: &str = "completed";
pub const APPOINT_STATUS_CANCELLED: &str = "cancelled";

impl AppointStatus {
    pub fn patient_str(&self) -> &'static str {
        match self {
            AppointStatus::Scheduled => APPOINT_STATUS_UPCOMING,
            AppointStatus::Completed => APPOINT_STATUS_COMPLETED,
            AppointStatus::Cancelled => APPOINT_STATUS_CANCELLED,
        }
    }

    pub fn doctor_str(&self) -> Option<&'static str> {
        match self {
            AppointStatus::Scheduled => Some(APPOINT_STATUS_PENDING),
            AppointStatus::Completed => Some(APPOINT_STATUS_COMPLETED),
            AppointStatus::Cancelled => None,
        }
    }

    pub fn from_patient_str(s: &str) -> Option<Self> {
        match s {
            APPOINT_STATUS_UPCOMING => Some(AppointStatus::Scheduled),
            APPOINT_STATUS_COMPLETED => Some(AppointStatus::Completed),
            APPOINT_STATUS_CANCELLED => Some(AppointStatus::Cancelled),
            _ => None,
        }
    }

    pub fn from_doctor_str(s: &str) -> Option<Self> {
        match s {
            APPOINT_STATUS_PENDING => Some(AppointStatus::Scheduled),
            APPOINT_STATUS_COMPLETED => Some(AppointStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BookingRequest {
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub patient_name: String,
}

#[derive(Clone, Debug)]
pub struct NewAppointment {
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointStatus,
    pub has_prescription: bool,
    pub version: u64,
    pub booked_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(id: String, data: NewAppointment, booked_at: DateTime<Utc>) -> Self {
        Self {
            id,
            doctor_id: data.doctor_id,
            doctor_name: data.doctor_name,
            specialty: data.specialty,
            patient_name: data.patient_name,
            date: data.date,
            time: data.time,
            status: AppointStatus::Scheduled,
            has_prescription: false,
            version: 0,
            booked_at,
        }
    }

    fn check_version(&self, expected_version: Option<u64>) -> Result<(), DomainError> {
        match expected_version {
            Some(version) if version != self.version => Err(DomainError::Conflict(format!(
                "Appointment {} was modified (version {}, expected {})",
                self.id, self.version, version
            ))),
            _ => Ok(()),
        }
    }

    pub(crate) fn cancel(&mut self, expected_version: Option<u64>) -> Result<bool, DomainError> {
        if self.status == AppointStatus::Cancelled {
            return Ok(false);
        }
        self.check_version(expected_version)?;
        if self.status == AppointStatus::Completed {
            return Err(DomainError::Conflict(
                "Appointment is already completed".to_string(),
            ));
        }

        self.status = AppointStatus::Cancelled;
        self.version += 1;
        Ok(true)
    }

    /// The only way an appointment becomes completed.
    pub(crate) fn complete(&mut self, expected_version: Option<u64>) -> Result<(), DomainError> {
        self.check_version(expected_version)?;
        match self.status {
            AppointStatus::Scheduled => {}
            AppointStatus::Completed => {
                return Err(DomainError::Conflict(
                    "Prescription already attached".to_string(),
                ))
            }
            AppointStatus::Cancelled => {
                return Err(DomainError::Conflict(
                    "Appointment is cancelled".to_string(),
                ))
            }
        }

        self.status = AppointStatus::Completed;
        self.has_prescription = true;
        self.version += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment() -> Appointment {
        let data = NewAppointment {
            doctor_id: "1".to_string(),
            doctor_name: "Dr. Sarah Johnson".to_string(),
            specialty: "Cardiologist".to_string(),
            patient_name: "John Doe".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            time: "09:00 AM".to_string(),
        };
        Appointment::new("1".to_string(), data, Utc::now())
    }

    #[test]
    fn new_appointment_is_upcoming_and_pending() {
        let appo = appointment();
        assert_eq!(appo.status.patient_str(), "upcoming");
        assert_eq!(appo.status.doctor_str(), Some("pending"));
        assert!(!appo.has_prescription);
    }

    #[test]
    fn cancel_twice_is_the_same_as_once() {
        let mut appo = appointment();
        assert_eq!(appo.cancel(None), Ok(true));
        let once = appo.clone();
        assert_eq!(appo.cancel(None), Ok(false));
        assert_eq!(appo, once);
        assert_eq!(appo.version, 1);
    }

    #[test]
    fn completed_cannot_be_cancelled() {
        let mut appo = appointment();
        appo.complete(None).unwrap();
        assert!(matches!(appo.cancel(None), Err(DomainError::Conflict(_))));
        assert_eq!(appo.status, AppointStatus::Completed);
    }

    #[test]
    fn complete_sets_status_and_flag_together() {
        let mut appo = appointment();
        appo.complete(Some(0)).unwrap();
        assert_eq!(appo.status, AppointStatus::Completed);
        assert!(appo.has_prescription);

        let before = appo.clone();
        assert!(appo.complete(None).is_err());
        assert_eq!(appo, before);
    }

    #[test]
    fn stale_version_is_rejected() {
        let mut appo = appointment();
        appo.cancel(None).unwrap();
        let before = appo.clone();
        assert!(matches!(appo.complete(Some(0)), Err(DomainError::Conflict(_))));
        assert_eq!(appo, before);
        assert!(!appo.has_prescription);
    }

    #[test]
    fn cancelled_has_no_doctor_status() {
        assert_eq!(AppointStatus::Cancelled.doctor_str(), None);
        assert_eq!(
            AppointStatus::from_doctor_str("pending"),
            Some(AppointStatus::Scheduled)
        );
        assert_eq!(AppointStatus::from_doctor_str("cancelled"), None);
        assert_eq!(
            AppointStatus::from_patient_str("cancelled"),
            Some(AppointStatus::Cancelled)
        );
    }
}
