use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use super::availability::{DayAvailability, WEEKDAYS, WEEKDAY_NAMES};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorData {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub doctors: Vec<DoctorData>,
    pub time_slots: Vec<String>,
    pub weekly_hours: [DayAvailability; WEEKDAYS],
}

impl Default for Catalog {
    fn default() -> Self {
        let doctor = |id: &str, name: &str, specialty: &str| DoctorData {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        };
        let time_slots = [
            "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "02:00 PM",
            "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
        ];

        Self {
            doctors: vec![
                doctor("1", "Dr. Sarah Johnson", "Cardiologist"),
                doctor("2", "Dr. Michael Chen", "General Physician"),
                doctor("3", "Dr. Emily Parker", "Dermatologist"),
                doctor("4", "Dr. James Wilson", "Orthopedic"),
            ],
            time_slots: time_slots.iter().map(|s| s.to_string()).collect(),
            weekly_hours: [
                DayAvailability::new("Monday", true, "09:00", "17:00"),
                DayAvailability::new("Tuesday", true, "09:00", "17:00"),
                DayAvailability::new("Wednesday", true, "09:00", "17:00"),
                DayAvailability::new("Thursday", true, "09:00", "17:00"),
                DayAvailability::new("Friday", true, "09:00", "17:00"),
                DayAvailability::new("Saturday", false, "09:00", "13:00"),
                DayAvailability::new("Sunday", false, "09:00", "13:00"),
            ],
        }
    }
}

impl Catalog {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Reading catalog {}", path.display()))?;
                Self::from_json_str(&text)
                    .with_context(|| format!("Parsing catalog {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(text).context("Malformed catalog")?;
        catalog.check()?;
        Ok(catalog)
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.doctors.is_empty() {
            bail!("Catalog lists no doctors");
        }
        if self.time_slots.is_empty() {
            bail!("Catalog lists no time slots");
        }
        for (i, doctor) in self.doctors.iter().enumerate() {
            if self.doctors[..i].iter().any(|d| d.id == doctor.id) {
                bail!("Duplicate doctor id '{}'", doctor.id);
            }
        }
        for (day, name) in self.weekly_hours.iter().zip(WEEKDAY_NAMES.iter()) {
            if day.day != *name {
                bail!("Weekly hours must run Monday to Sunday, found '{}' for {}", day.day, name);
            }
        }
        Ok(())
    }

    pub fn doctor(&self, id: &str) -> Option<&DoctorData> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|s| s == slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_the_portals() {
        let catalog = Catalog::default();
        assert!(catalog.check().is_ok());
        assert_eq!(catalog.doctors.len(), 4);
        assert_eq!(catalog.time_slots.len(), 12);
        assert_eq!(catalog.doctor("1").unwrap().name, "Dr. Sarah Johnson");
        assert!(catalog.has_slot("02:30 PM"));
        assert!(!catalog.has_slot("12:00 PM"));
    }

    #[test]
    fn json_round_trip_through_default() {
        let text = serde_json::to_string(&Catalog::default()).unwrap();
        let catalog = Catalog::from_json_str(&text).unwrap();
        assert_eq!(catalog.doctors, Catalog::default().doctors);
    }

    #[test]
    fn rejects_out_of_order_week() {
        let mut catalog = Catalog::default();
        catalog.weekly_hours.swap(0, 6);
        let text = serde_json::to_string(&catalog).unwrap();
        assert!(Catalog::from_json_str(&text).is_err());
    }

    #[test]
    fn rejects_duplicate_doctors() {
        let mut catalog = Catalog::default();
        catalog.doctors[1].id = "1".to_string();
        let text = serde_json::to_string(&catalog).unwrap();
        assert!(Catalog::from_json_str(&text).is_err());
    }

    #[test]
    fn rejects_short_week() {
        let text = r#"{"doctors":[{"id":"1","name":"A","specialty":"B"}],"time_slots":["09:00 AM"],"weekly_hours":[]}"#;
        assert!(Catalog::from_json_str(text).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Catalog::load(Some(Path::new("/nonexistent/catalog.json"))).is_err());
        assert!(Catalog::load(None).is_ok());
    }
}
