use serde::Serialize;

#[derive(Default, Serialize)]
pub struct DoctorItem {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

#[derive(Default, Serialize)]
pub struct SearchDoctorResponse {
    pub success: bool,
    pub err: String,
    pub doctors: Vec<DoctorItem>,
}

#[derive(Default, Serialize)]
pub struct TimeSlotResponse {
    pub success: bool,
    pub err: String,
    pub time_slots: Vec<String>,
}
