mod requests;
mod responses;
mod utils;

use crate::{
    models::{appointments::AppointStatus, prescriptions::NewPrescription},
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
    utils::{read_editor, to_appoint_item, to_day_items, write_editor},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_appoint)
        .service(stats)
        .service(prescribe)
        .service(view_prescription)
        .service(availability)
        .service(toggle_day)
        .service(set_day)
        .service(save_availability);
}

crate::post_funcs! {
    (search_appoint, "/search_appoint", SearchAppointRequest, SearchAppointResponse),
    (stats, "/stats", StatsRequest, StatsResponse),
    (prescribe, "/prescribe", PrescribeRequest, PrescribeResponse),
    (view_prescription, "/view_prescription", ViewPrescriptionRequest, ViewPrescriptionResponse),
    (availability, "/availability", AvailabilityRequest, AvailabilityResponse),
    (toggle_day, "/toggle_day", ToggleDayRequest, AvailabilityResponse),
    (set_day, "/set_day", SetDayRequest, SimpleResponse),
    (save_availability, "/save_availability", AvailabilityRequest, SaveAvailabilityResponse),
}

async fn search_appoint_impl(
    state: web::Data<AppState>,
    info: web::Json<SearchAppointRequest>,
) -> anyhow::Result<SearchAppointResponse> {
    let info = info.into_inner();
    let status = crate::utils::parse_status_filter(info.status, AppointStatus::from_doctor_str)?;
    let filter = AppointFilter {
        status,
        doctor_id: info.doctor_id.filter(|id| !id.trim().is_empty()),
        ..Default::default()
    };

    let appos = state
        .appointments
        .list(&filter)?
        .into_iter()
        .filter_map(to_appoint_item)
        .collect();

    Ok(SearchAppointResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        appointments: appos,
    })
}

async fn stats_impl(
    state: web::Data<AppState>,
    info: web::Json<StatsRequest>,
) -> anyhow::Result<StatsResponse> {
    let info = info.into_inner();
    let filter = AppointFilter {
        doctor_id: info.doctor_id.filter(|id| !id.trim().is_empty()),
        ..Default::default()
    };

    let mut response = StatsResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        ..Default::default()
    };
    for appo in state.appointments.list(&filter)? {
        match appo.status {
            AppointStatus::Scheduled => {
                response.pending += 1;
                if !appo.has_prescription {
                    response.pending_reports += 1;
                }
            }
            AppointStatus::Completed => response.completed += 1,
            AppointStatus::Cancelled => {}
        }
    }

    Ok(response)
}

async fn prescribe_impl(
    state: web::Data<AppState>,
    info: web::Json<PrescribeRequest>,
) -> anyhow::Result<PrescribeResponse> {
    let info = info.into_inner();
    let data = NewPrescription {
        diagnosis: info.diagnosis,
        medicines: info.medicines,
        instructions: info.instructions,
        notes: info.notes,
    };
    let appointment_id = &info.appointment_id;
    let appo = state
        .appointments
        .attach_prescription(appointment_id, data, info.expected_version)
        .with_context(|| format!("Prescribing for appointment '{}'", appointment_id))?;
    info!(
        "Appointment {} for {} completed with prescription",
        appo.id, appo.patient_name
    );

    let appointment = to_appoint_item(appo).unwrap_or_default();
    Ok(PrescribeResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        appointment,
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

async fn availability_impl(
    state: web::Data<AppState>,
    _info: web::Json<AvailabilityRequest>,
) -> anyhow::Result<AvailabilityResponse> {
    let editor = read_editor(&state.availability)?;

    Ok(AvailabilityResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        days: to_day_items(editor.days()),
    })
}

async fn toggle_day_impl(
    state: web::Data<AppState>,
    info: web::Json<ToggleDayRequest>,
) -> anyhow::Result<AvailabilityResponse> {
    let day_index = assert::assert_day_index(info.day_index)?;
    let mut editor = write_editor(&state.availability)?;
    let enabled = editor.toggle(day_index)?;
    info!(
        "{} is now {}",
        editor.days()[day_index].day,
        if enabled { "available" } else { "unavailable" }
    );

    Ok(AvailabilityResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        days: to_day_items(editor.days()),
    })
}

async fn set_day_impl(
    state: web::Data<AppState>,
    info: web::Json<SetDayRequest>,
) -> anyhow::Result<SimpleResponse> {
    let day_index = assert::assert_day_index(info.day_index)?;
    write_editor(&state.availability)?.set_day_enabled(day_index, info.enabled)?;

    Ok(SimpleResponse::ok())
}

async fn save_availability_impl(
    state: web::Data<AppState>,
    _info: web::Json<AvailabilityRequest>,
) -> anyhow::Result<SaveAvailabilityResponse> {
    let enabled_days = read_editor(&state.availability)?.save();
    info!("Availability saved, {} working days", enabled_days);

    Ok(SaveAvailabilityResponse {
        success: true,
        err: "".to_string(),
        err_kind: "".to_string(),
        message: "Availability updated successfully!".to_string(),
        enabled_days,
    })
}
