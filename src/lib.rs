pub mod error;
pub mod models;
pub mod protocol;
pub mod settings;
pub mod store;
pub mod utils;

mod catalog;
mod doctor;
mod user;

use std::sync::{Arc, RwLock};

use actix_web::web;

use crate::{
    models::{availability::AvailabilityEditor, catalog::Catalog},
    store::{AppointmentRepository, MemoryRepository},
};

pub struct AppState {
    pub appointments: Arc<dyn AppointmentRepository>,
    pub availability: RwLock<AvailabilityEditor>,
    pub catalog: Catalog,
    pub patient_name: String,
}

impl AppState {
    pub fn new(catalog: Catalog, patient_name: String) -> Self {
        Self::with_repository(Arc::new(MemoryRepository::new()), catalog, patient_name)
    }

    pub fn with_repository(
        appointments: Arc<dyn AppointmentRepository>,
        catalog: Catalog,
        patient_name: String,
    ) -> Self {
        let availability = RwLock::new(AvailabilityEditor::new(catalog.weekly_hours.clone()));
        Self {
            appointments,
            availability,
            catalog,
            patient_name,
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(protocol::json_config())
        // patient
        .service(web::scope("/user").configure(user::config))
        // doctor
        .service(web::scope("/doctor").configure(doctor::config))
        // reference data
        .service(web::scope("/catalog").configure(catalog::config));
}
