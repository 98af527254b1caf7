use actix_web::{error::InternalError, web, HttpResponse};
use serde::Serialize;

use crate::models::prescriptions::Prescription;

#[derive(Default, Serialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
}

impl SimpleResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            err: "".to_string(),
            err_kind: "".to_string(),
        }
    }
}

/// Bodies that fail to deserialize still answer with the response envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = SimpleResponse {
            success: false,
            err: format!("Malformed request: {}", err),
            err_kind: "validation".to_string(),
        };
        log::warn!("Rejected request body: {}", err);
        InternalError::from_response(err, HttpResponse::Ok().json(response)).into()
    })
}

#[derive(Default, Serialize)]
pub struct PrescriptionItem {
    pub appointment_id: String,
    pub diagnosis: String,
    pub medicines: String,
    pub instructions: String,
    pub notes: String,
    pub created_at: String,
}

impl From<Prescription> for PrescriptionItem {
    fn from(data: Prescription) -> Self {
        Self {
            appointment_id: data.appointment_id,
            diagnosis: data.diagnosis,
            medicines: data.medicines,
            instructions: data.instructions.unwrap_or_default(),
            notes: data.notes.unwrap_or_default(),
            created_at: crate::utils::format_time_str(&data.created_at),
        }
    }
}

#[derive(Default, Serialize)]
pub struct ViewPrescriptionResponse {
    pub success: bool,
    pub err: String,
    pub err_kind: String,
    pub prescription: PrescriptionItem,
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err(err: &anyhow::Error) -> Self {
                    Self {
                        success: false,
                        err: format!("{:#}", err),
                        err_kind: $crate::error::error_kind(err).to_string(),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

impl_err_response! {
    SimpleResponse,
    ViewPrescriptionResponse,
}
