use serde::Serialize;

#[derive(Default, Serialize)]
pub struct AppointItem {
    pub id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub has_prescription: bool,
    pub version: u64,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub appointments: Vec<AppointItem>,
}

#[derive(Default, Serialize)]
pub struct PrescribeResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub appointment: AppointItem,
}

#[derive(Default, Serialize)]
pub struct DayItem {
    pub day_index: usize,
    pub day: String,
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Default, Serialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub days: Vec<DayItem>,
}

#[derive(Default, Serialize)]
pub struct SaveAvailabilityResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub message: String,
    pub enabled_days: usize,
}

#[derive(Default, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub pending: usize,
    pub completed: usize,
    pub pending_reports: usize,
}

crate::impl_err_response! {
    SearchAppointResponse,
    PrescribeResponse,
    AvailabilityResponse,
    SaveAvailabilityResponse,
    StatsResponse,
}
