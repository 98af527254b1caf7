pub mod assert;
mod memory;

pub use self::memory::MemoryRepository;

use anyhow::Context;
use log::info;

use crate::{
    error::DomainError,
    models::{
        appointments::{AppointStatus, Appointment, BookingRequest, NewAppointment},
        catalog::Catalog,
        prescriptions::{NewPrescription, Prescription},
    },
};

#[derive(Clone, Debug, Default)]
pub struct AppointFilter {
    pub status: Option<AppointStatus>,
    pub doctor_id: Option<String>,
    pub patient_name: Option<String>,
}

impl AppointFilter {
    pub fn matches(&self, appo: &Appointment) -> bool {
        self.status.map_or(true, |s| appo.status == s)
            && self.doctor_id.as_ref().map_or(true, |d| &appo.doctor_id == d)
            && self
                .patient_name
                .as_ref()
                .map_or(true, |p| &appo.patient_name == p)
    }
}

/// Storage for appointments and their prescriptions, shared by both portals.
///
/// Each method is atomic: on `Err` nothing has changed, on `Ok` every field
/// touched by the operation is visible at once.
pub trait AppointmentRepository: Send + Sync {
    fn create(&self, data: NewAppointment) -> Result<Appointment, DomainError>;

    fn get(&self, id: &str) -> Result<Appointment, DomainError>;

    fn list(&self, filter: &AppointFilter) -> Result<Vec<Appointment>, DomainError>;

    fn cancel(&self, id: &str, expected_version: Option<u64>) -> Result<Appointment, DomainError>;

    fn attach_prescription(
        &self,
        appointment_id: &str,
        data: NewPrescription,
        expected_version: Option<u64>,
    ) -> Result<Appointment, DomainError>;

    fn prescription(&self, appointment_id: &str) -> Result<Prescription, DomainError>;
}

pub fn seed_demo(repo: &dyn AppointmentRepository, catalog: &Catalog) -> anyhow::Result<()> {
    let seeds = [
        (
            "Michael Brown",
            "1",
            "2025-10-28",
            "02:30 PM",
            Some(("Hypertension", "Amlodipine 5mg once daily")),
        ),
        (
            "John Doe",
            "2",
            "2025-10-28",
            "02:30 PM",
            Some(("Seasonal flu", "Paracetamol 500mg")),
        ),
        ("Emma Wilson", "1", "2025-11-02", "11:30 AM", None),
        ("John Doe", "1", "2025-11-02", "10:00 AM", None),
    ];

    for (patient_name, doctor_id, date, time, prescription) in seeds.iter() {
        let booking = BookingRequest {
            doctor_id: doctor_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            patient_name: patient_name.to_string(),
        };
        let data = assert::assert_booking(catalog, booking)
            .context("Demo data does not fit the catalog, set MEDIBOOK_SEED_DEMO=false")?;
        let appo = repo.create(data)?;
        if let Some((diagnosis, medicines)) = prescription {
            let data = NewPrescription {
                diagnosis: diagnosis.to_string(),
                medicines: medicines.to_string(),
                ..Default::default()
            };
            repo.attach_prescription(&appo.id, data, None)?;
        }
    }

    info!("Seeded {} demo appointments", seeds.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_seed_fits_default_catalog() {
        let repo = MemoryRepository::new();
        seed_demo(&repo, &Catalog::default()).unwrap();

        let all = repo.list(&AppointFilter::default()).unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].patient_name, "John Doe");
        assert_eq!(all[0].doctor_name, "Dr. Sarah Johnson");

        let pending = AppointFilter {
            status: Some(AppointStatus::Scheduled),
            doctor_id: Some("1".to_string()),
            ..Default::default()
        };
        assert_eq!(repo.list(&pending).unwrap().len(), 2);

        for appo in all.iter().filter(|a| a.status == AppointStatus::Completed) {
            assert!(appo.has_prescription);
            assert!(repo.prescription(&appo.id).is_ok());
        }
    }

    #[test]
    fn demo_seed_rejects_foreign_catalog() {
        let mut catalog = Catalog::default();
        catalog.time_slots = vec!["08:00 AM".to_string()];
        let repo = MemoryRepository::new();
        assert!(seed_demo(&repo, &catalog).is_err());
    }
}
