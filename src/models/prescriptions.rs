use chrono::{DateTime, Utc};

#[derive(Clone, Debug, Default)]
pub struct NewPrescription {
    pub diagnosis: String,
    pub medicines: String,
    pub instructions: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Prescription {
    pub appointment_id: String,
    pub diagnosis: String,
    pub medicines: String,
    pub instructions: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Prescription {
    pub fn new(appointment_id: String, data: NewPrescription, created_at: DateTime<Utc>) -> Self {
        Self {
            appointment_id,
            diagnosis: data.diagnosis,
            medicines: data.medicines,
            instructions: data.instructions.filter(|s| !s.trim().is_empty()),
            notes: data.notes.filter(|s| !s.trim().is_empty()),
            created_at,
        }
    }
}
