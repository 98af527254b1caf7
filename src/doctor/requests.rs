use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub status: Option<String>,
    pub doctor_id: Option<String>,
}

#[derive(Deserialize)]
pub struct PrescribeRequest {
    pub appointment_id: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub medicines: String,
    pub instructions: Option<String>,
    pub notes: Option<String>,
    pub expected_version: Option<u64>,
}

#[derive(Deserialize)]
pub struct ViewPrescriptionRequest {
    pub appointment_id: String,
}

#[derive(Deserialize)]
pub struct AvailabilityRequest {}

#[derive(Deserialize)]
pub struct ToggleDayRequest {
    pub day_index: i64,
}

#[derive(Deserialize)]
pub struct SetDayRequest {
    pub day_index: i64,
    pub enabled: bool,
}

#[derive(Deserialize)]
pub struct StatsRequest {
    pub doctor_id: Option<String>,
}
