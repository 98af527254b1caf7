use std::{
    collections::{HashMap, VecDeque},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::{DateTime, Utc};
use log::debug;

use super::{assert, AppointFilter, AppointmentRepository};
use crate::{
    error::DomainError,
    models::{
        appointments::{Appointment, NewAppointment},
        prescriptions::{NewPrescription, Prescription},
    },
};

#[derive(Default)]
struct Inner {
    appointments: VecDeque<Appointment>,
    prescriptions: HashMap<String, Prescription>,
    last_id: i64,
}

impl Inner {
    fn next_id(&mut self, now: &DateTime<Utc>) -> String {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Appointment, DomainError> {
        self.appointments
            .iter_mut()
            .find(|appo| appo.id == id)
            .ok_or(DomainError::NotFound("appointment"))
    }
}

#[derive(Default)]
pub struct MemoryRepository {
    inner: RwLock<Inner>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, DomainError> {
        self.inner.read().map_err(|_| DomainError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, DomainError> {
        self.inner.write().map_err(|_| DomainError::Poisoned)
    }
}

impl AppointmentRepository for MemoryRepository {
    fn create(&self, data: NewAppointment) -> Result<Appointment, DomainError> {
        let mut inner = self.write()?;
        let now = Utc::now();
        let id = inner.next_id(&now);
        let appo = Appointment::new(id, data, now);
        inner.appointments.push_front(appo.clone());
        debug!("Stored appointment {}, {} in total", appo.id, inner.appointments.len());
        Ok(appo)
    }

    fn get(&self, id: &str) -> Result<Appointment, DomainError> {
        self.read()?
            .appointments
            .iter()
            .find(|appo| appo.id == id)
            .cloned()
            .ok_or(DomainError::NotFound("appointment"))
    }

    fn list(&self, filter: &AppointFilter) -> Result<Vec<Appointment>, DomainError> {
        Ok(self
            .read()?
            .appointments
            .iter()
            .filter(|appo| filter.matches(appo))
            .cloned()
            .collect())
    }

    fn cancel(&self, id: &str, expected_version: Option<u64>) -> Result<Appointment, DomainError> {
        let mut inner = self.write()?;
        let appo = inner.find_mut(id)?;
        if !appo.cancel(expected_version)? {
            debug!("Appointment {} was already cancelled", id);
        }
        Ok(appo.clone())
    }

    fn attach_prescription(
        &self,
        appointment_id: &str,
        data: NewPrescription,
        expected_version: Option<u64>,
    ) -> Result<Appointment, DomainError> {
        assert::assert_prescription(&data)?;

        let mut inner = self.write()?;
        let appo = inner.find_mut(appointment_id)?;
        appo.complete(expected_version)?;
        let appo = appo.clone();

        let prescription = Prescription::new(appo.id.clone(), data, Utc::now());
        inner.prescriptions.insert(appo.id.clone(), prescription);
        Ok(appo)
    }

    fn prescription(&self, appointment_id: &str) -> Result<Prescription, DomainError> {
        let inner = self.read()?;
        if !inner.appointments.iter().any(|appo| appo.id == appointment_id) {
            return Err(DomainError::NotFound("appointment"));
        }
        inner
            .prescriptions
            .get(appointment_id)
            .cloned()
            .ok_or(DomainError::NotFound("prescription"))
    }
}
