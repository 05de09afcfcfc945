use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: &str, name: &str, specialty: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }

    /// Specialty as shown on the card.
    pub fn specialty_label(&self) -> String {
        capitalize(&self.specialty)
    }
}

/// Upper-cases the first character.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub label: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub is_available: bool,
}

impl TimeSlot {
    pub fn available(label: &str) -> Self {
        Self {
            label: label.to_string(),
            is_available: true,
        }
    }

    pub fn booked(label: &str) -> Self {
        Self {
            label: label.to_string(),
            is_available: false,
        }
    }
}

/// Doctors, rooms and time slots offered on the booking page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BookingCatalog {
    pub doctors: Vec<Doctor>,
    pub rooms: Vec<Room>,
    pub time_slots: Vec<TimeSlot>,
}

impl BookingCatalog {
    /// Distinct specialties in catalog order, for the specialty selector.
    pub fn specialties(&self) -> Vec<String> {
        let mut specialties: Vec<String> = Vec::new();
        for doctor in &self.doctors {
            if !specialties.contains(&doctor.specialty) {
                specialties.push(doctor.specialty.clone());
            }
        }
        specialties
    }
}

impl Default for BookingCatalog {
    fn default() -> Self {
        Self {
            doctors: vec![
                Doctor::new("1", "Dr. Maria Santos", "cardiology"),
                Doctor::new("2", "Dr. James Reyes", "pediatrics"),
                Doctor::new("3", "Dr. Ana Cruz", "neurology"),
                Doctor::new("4", "Dr. Paolo dela Rosa", "orthopedics"),
                Doctor::new("5", "Dr. Liza Mendoza", "cardiology"),
                Doctor::new("6", "Dr. Carlo Villanueva", "dermatology"),
            ],
            rooms: vec![
                Room {
                    label: "101".to_string(),
                    description: "Consultation Room, Ground Floor".to_string(),
                },
                Room {
                    label: "204".to_string(),
                    description: "Examination Room, Second Floor".to_string(),
                },
                Room {
                    label: "310".to_string(),
                    description: "Specialist Suite, Third Floor".to_string(),
                },
            ],
            time_slots: vec![
                TimeSlot::available("09:00 AM"),
                TimeSlot::available("10:00 AM"),
                TimeSlot::booked("11:00 AM"),
                TimeSlot::available("01:00 PM"),
                TimeSlot::available("02:00 PM"),
                TimeSlot::booked("03:00 PM"),
                TimeSlot::available("04:00 PM"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialty_label_capitalizes_first_letter() {
        let doctor = Doctor::new("1", "Dr. Test", "neurology");
        assert_eq!(doctor.specialty_label(), "Neurology");
        assert_eq!(Doctor::new("2", "Dr. Empty", "").specialty_label(), "");
    }

    #[test]
    fn specialties_are_distinct_and_ordered() {
        let catalog = BookingCatalog::default();
        assert_eq!(
            catalog.specialties(),
            vec!["cardiology", "pediatrics", "neurology", "orthopedics", "dermatology"]
        );
    }
}
