use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::responses::{AppointItem, DayItem};
use crate::{
    error::DomainError,
    models::{
        appointments::Appointment,
        availability::{AvailabilityEditor, DayAvailability},
    },
};

pub fn to_appoint_item(data: Appointment) -> Option<AppointItem> {
    let status = data.status.doctor_str()?;
    Some(AppointItem {
        status: status.to_string(),
        date: crate::utils::format_date_str(&data.date),
        id: data.id,
        patient_name: data.patient_name,
        doctor_id: data.doctor_id,
        time: data.time,
        has_prescription: data.has_prescription,
        version: data.version,
    })
}

pub fn to_day_items(days: &[DayAvailability]) -> Vec<DayItem> {
    days.iter()
        .enumerate()
        .map(|(day_index, day)| DayItem {
            day_index,
            day: day.day.clone(),
            enabled: day.enabled,
            start_time: day.start_time.clone(),
            end_time: day.end_time.clone(),
        })
        .collect()
}

pub fn read_editor(
    lock: &RwLock<AvailabilityEditor>,
) -> Result<RwLockReadGuard<'_, AvailabilityEditor>, DomainError> {
    lock.read().map_err(|_| DomainError::Poisoned)
}

pub fn write_editor(
    lock: &RwLock<AvailabilityEditor>,
) -> Result<RwLockWriteGuard<'_, AvailabilityEditor>, DomainError> {
    lock.write().map_err(|_| DomainError::Poisoned)
}
