use serde::Serialize;

#[derive(Default, Serialize)]
pub struct AppointItem {
    pub id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub version: u64,
    pub booked_at: String,
}

#[derive(Default, Serialize)]
pub struct AppointResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub appointment: AppointItem,
}

#[derive(Default, Serialize)]
pub struct SearchAppointResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub appointments: Vec<AppointItem>,
}

crate::impl_err_response! {
    AppointResponse,
    SearchAppointResponse,
}
