use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppointRequest {
    #[serde(default)]
    pub doctor_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub patient_name: Option<String>,
}

#[derive(Deserialize)]
pub struct CancelAppointRequest {
    pub id: String,
    pub expected_version: Option<u64>,
}

#[derive(Deserialize)]
pub struct SearchAppointRequest {
    pub status: Option<String>,
    pub patient_name: Option<String>,
}

#[derive(Deserialize)]
pub struct ViewPrescriptionRequest {
    pub appointment_id: String,
}
