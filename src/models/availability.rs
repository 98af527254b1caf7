use crate::error::DomainError;
use serde::{Deserialize, Serialize};

pub const WEEKDAYS: usize = 7;

pub const WEEKDAY_NAMES: [&str; WEEKDAYS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: String,
    pub enabled: bool,
    pub start_time: String,
    pub end_time: String,
}

impl DayAvailability {
    pub fn new(day: &str, enabled: bool, start_time: &str, end_time: &str) -> Self {
        Self {
            day: day.to_string(),
            enabled,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }
}

/// Weekly working hours, Monday first. Has no effect on which bookings are
/// accepted.
#[derive(Clone, Debug)]
pub struct AvailabilityEditor {
    days: [DayAvailability; WEEKDAYS],
}

impl AvailabilityEditor {
    pub fn new(days: [DayAvailability; WEEKDAYS]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DayAvailability] {
        &self.days
    }

    fn day_mut(&mut self, day_index: usize) -> Result<&mut DayAvailability, DomainError> {
        self.days
            .get_mut(day_index)
            .ok_or(DomainError::Range(day_index as i64))
    }

    pub fn toggle(&mut self, day_index: usize) -> Result<bool, DomainError> {
        let day = self.day_mut(day_index)?;
        day.enabled = !day.enabled;
        Ok(day.enabled)
    }

    pub fn set_day_enabled(&mut self, day_index: usize, enabled: bool) -> Result<(), DomainError> {
        self.day_mut(day_index)?.enabled = enabled;
        Ok(())
    }

    pub fn save(&self) -> usize {
        self.days.iter().filter(|day| day.enabled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::Catalog;

    fn editor() -> AvailabilityEditor {
        AvailabilityEditor::new(Catalog::default().weekly_hours)
    }

    #[test]
    fn toggle_twice_restores_value() {
        let mut editor = editor();
        for i in 0..WEEKDAYS {
            let before = editor.days()[i].enabled;
            assert_eq!(editor.toggle(i), Ok(!before));
            assert_eq!(editor.toggle(i), Ok(before));
            assert_eq!(editor.days()[i].enabled, before);
        }
    }

    #[test]
    fn out_of_range_leaves_days_untouched() {
        let mut editor = editor();
        let before = editor.days().to_vec();
        assert_eq!(editor.toggle(7), Err(DomainError::Range(7)));
        assert_eq!(editor.set_day_enabled(100, true), Err(DomainError::Range(100)));
        assert_eq!(editor.days(), before.as_slice());
    }

    #[test]
    fn days_are_monday_first() {
        let editor = editor();
        let names: Vec<_> = editor.days().iter().map(|d| d.day.as_str()).collect();
        assert_eq!(names, WEEKDAY_NAMES.to_vec());
        assert_eq!(editor.save(), 5);
    }

    #[test]
    fn set_day_enabled_is_absolute() {
        let mut editor = editor();
        editor.set_day_enabled(5, true).unwrap();
        editor.set_day_enabled(5, true).unwrap();
        assert!(editor.days()[5].enabled);
        editor.set_day_enabled(0, false).unwrap();
        assert!(!editor.days()[0].enabled);
    }
}
