use super::responses::AppointItem;
use crate::{models::appointments::Appointment, AppState};

pub fn to_appoint_item(data: Appointment) -> AppointItem {
    AppointItem {
        status: data.status.patient_str().to_string(),
        date: crate::utils::format_date_str(&data.date),
        booked_at: crate::utils::format_time_str(&data.booked_at),
        id: data.id,
        doctor_id: data.doctor_id,
        doctor_name: data.doctor_name,
        specialty: data.specialty,
        time: data.time,
        version: data.version,
    }
}

pub fn patient_name_or_default(name: Option<String>, state: &AppState) -> String {
    name.filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| state.patient_name.clone())
}
