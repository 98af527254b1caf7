mod responses;

use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};

use self::responses::{DoctorItem, SearchDoctorResponse, TimeSlotResponse};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(doctors).service(time_slots);
}

#[get("/doctors")]
async fn doctors(state: web::Data<AppState>) -> impl Responder {
    let items = state
        .catalog
        .doctors
        .iter()
        .map(|doctor| DoctorItem {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
        })
        .collect();

    HttpResponse::Ok().json(SearchDoctorResponse {
        success: true,
        err: "".to_string(),
        doctors: items,
    })
}

#[get("/time_slots")]
async fn time_slots(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(TimeSlotResponse {
        success: true,
        err: "".to_string(),
        time_slots: state.catalog.time_slots.clone(),
    })
}
