mod requests;
mod responses;
mod utils;

use crate::{
    models::appointments::{AppointStatus, BookingRequest},
    protocol::{SimpleResponse, ViewPrescriptionResponse},
    store::{assert, AppointFilter},
    AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;
use log::info;

use self::{
    requests::*,
    responses::*,
    utils::{patient_name_or_default, to_appoint_item},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(appoint)
        .service(cancel_appoint)
        .service(search_appoint)
        .service(view_prescription);
}

crate::post_funcs! {
    (appoint, "/appoint", AppointRequest, AppointResponse),
    (cancel_appoint, "/cancel_appoint", CancelAppointRequest, SimpleResponse),
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (view_prescription, "/view_prescription", ViewPrescriptionRequest, ViewPrescriptionResponse),
}

async fn appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<AppointRequest>,
) -> anyhow::Result<AppointResponse> {
    let info = info.into_inner();
    let patient_name = patient_name_or_default(info.patient_name, &state);

    let booking = BookingRequest {
        doctor_id: info.doctor_id,
        date: info.date,
        time: info.time,
        patient_name,
    };
    let data = assert::assert_booking(&state.catalog, booking)?;
    let appo = state.appointments.create(data)?;
    info!(
        "Booked appointment {} for {} with {} on {} at {}",
        appo.id, appo.patient_name, appo.doctor_name, appo.date, appo.time
    );

    Ok(AppointResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        appointment: to_appoint_item(appo),
    })
}

async fn cancel_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<CancelAppointRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    let appo = state
        .appointments
        .cancel(&info.id, info.expected_version)
        .with_context(|| format!("Cancelling appointment '{}'", info.id))?;
    info!("Appointment {} is {}", appo.id, appo.status.patient_str());

    Ok(SimpleResponse::ok())
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    let status = crate::utils::parse_status_filter(info.status, AppointStatus::from_patient_str)?;
    let filter = AppointFilter {
        status,
        patient_name: Some(patient_name_or_default(info.patient_name, &state)),
        ..Default::default()
    };

    let appos = state
        .appointments
        .list(&filter)?
        .into_iter()
        .map(to_appoint_item)
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        appointments: appos,
    })
}

async fn view_prescription_impl(
    state: web::Data<AppState>,
    info: web::Json<ViewPrescriptionRequest>,
) -> anyhow::Result<ViewPrescriptionResponse> {
    let info = info.into_inner();
    let prescription = state.appointments.prescription(&info.appointment_id)?;

    Ok(ViewPrescriptionResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        prescription: prescription.into(),
    })
}
