use super::catalog::Doctor;

pub const ALL_SPECIALTIES: &str = "all";
pub const DEFAULT_TITLE: &str = "Book an Appointment";
pub const DEFAULT_SUBTITLE: &str =
    "Select a hospital from the map above or choose from the doctors below.";

#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryEntry {
    pub doctor: Doctor,
    /// Assigned once the map has found nearby hospitals.
    pub hospital: Option<String>,
    pub visible: bool,
}

/// Heading text above the doctor list.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterBanner {
    pub title: String,
    pub subtitle: String,
    /// Set when a hospital filter matched nobody and the list fell back to everyone.
    pub fallback_notice: Option<String>,
    pub show_all_visible: bool,
}

impl Default for FilterBanner {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            fallback_notice: None,
            show_all_visible: false,
        }
    }
}

/// Derived per-doctor attributes (hospital assignment, visibility) kept beside the
/// catalog entries.
#[derive(Clone, Debug, PartialEq)]
pub struct DoctorDirectory {
    entries: Vec<DirectoryEntry>,
    specialty: String,
    specialty_labels_visible: bool,
    banner: FilterBanner,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self {
            entries: doctors
                .into_iter()
                .map(|doctor| DirectoryEntry {
                    doctor,
                    hospital: None,
                    visible: true,
                })
                .collect(),
            specialty: ALL_SPECIALTIES.to_string(),
            specialty_labels_visible: true,
            banner: FilterBanner::default(),
        }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn get(&self, doctor_id: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.doctor.id == doctor_id)
    }

    pub fn visible(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.iter().filter(|e| e.visible)
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn specialty_labels_visible(&self) -> bool {
        self.specialty_labels_visible
    }

    pub fn banner(&self) -> &FilterBanner {
        &self.banner
    }

    /// Hands out hospitals round-robin: doctor `i` gets `hospitals[i % len]`.
    pub fn assign_hospitals(&mut self, hospitals: &[String]) {
        if hospitals.is_empty() {
            return;
        }
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.hospital = Some(hospitals[index % hospitals.len()].clone());
        }
    }

    /// Shows only doctors assigned to `hospital`. Returns how many are visible.
    pub fn filter_by_hospital(&mut self, hospital: &str) -> usize {
        self.banner = FilterBanner {
            title: format!("Book at {}", hospital),
            subtitle: format!("Showing doctors for {}.", hospital),
            fallback_notice: None,
            show_all_visible: true,
        };

        let mut visible = 0;
        for entry in self.entries.iter_mut() {
            entry.visible = entry.hospital.as_deref() == Some(hospital);
            if entry.visible {
                visible += 1;
            }
        }
        visible
    }

    pub fn show_all(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.visible = true;
        }
        self.specialty_labels_visible = true;
        self.specialty = ALL_SPECIALTIES.to_string();
        self.banner = FilterBanner::default();
    }

    pub fn note_fallback(&mut self, hospital: &str) {
        self.banner.fallback_notice = Some(format!(
            "No doctors found for {}. Showing all doctors instead.",
            hospital
        ));
    }

    /// Filters on specialty alone. An active hospital filter is not taken into account.
    pub fn filter_by_specialty(&mut self, specialty: &str) {
        let all = specialty == ALL_SPECIALTIES;
        for entry in self.entries.iter_mut() {
            entry.visible = all || entry.doctor.specialty == specialty;
        }
        self.specialty_labels_visible = all;
        self.specialty = specialty.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> DoctorDirectory {
        DoctorDirectory::new(vec![
            Doctor::new("a", "Dr. A", "cardiology"),
            Doctor::new("b", "Dr. B", "pediatrics"),
            Doctor::new("c", "Dr. C", "cardiology"),
        ])
    }

    fn visible_ids(directory: &DoctorDirectory) -> Vec<&str> {
        directory.visible().map(|e| e.doctor.id.as_str()).collect()
    }

    #[test]
    fn hospitals_are_assigned_round_robin() {
        let mut directory = directory();
        directory.assign_hospitals(&["General".to_string(), "St. Luke".to_string()]);

        let assigned: Vec<_> = directory
            .entries()
            .iter()
            .map(|e| e.hospital.clone().unwrap())
            .collect();
        assert_eq!(assigned, vec!["General", "St. Luke", "General"]);
    }

    #[test]
    fn empty_hospital_list_leaves_assignments_alone() {
        let mut directory = directory();
        directory.assign_hospitals(&[]);
        assert!(directory.entries().iter().all(|e| e.hospital.is_none()));
    }

    #[test]
    fn hospital_filter_shows_only_matching_doctors() {
        let mut directory = directory();
        directory.assign_hospitals(&["General".to_string(), "St. Luke".to_string()]);

        let count = directory.filter_by_hospital("St. Luke");

        assert_eq!(count, 1);
        assert_eq!(visible_ids(&directory), vec!["b"]);
        assert_eq!(directory.banner().title, "Book at St. Luke");
        assert_eq!(directory.banner().subtitle, "Showing doctors for St. Luke.");
        assert!(directory.banner().show_all_visible);
    }

    #[test]
    fn show_all_resets_specialty_and_banner() {
        let mut directory = directory();
        directory.filter_by_specialty("pediatrics");
        directory.filter_by_hospital("General");

        directory.show_all();

        assert_eq!(visible_ids(&directory), vec!["a", "b", "c"]);
        assert_eq!(directory.specialty(), ALL_SPECIALTIES);
        assert!(directory.specialty_labels_visible());
        assert_eq!(directory.banner(), &FilterBanner::default());
    }

    #[test]
    fn specialty_filter_hides_labels_unless_all() {
        let mut directory = directory();

        directory.filter_by_specialty("cardiology");
        assert_eq!(visible_ids(&directory), vec!["a", "c"]);
        assert!(!directory.specialty_labels_visible());

        directory.filter_by_specialty(ALL_SPECIALTIES);
        assert_eq!(visible_ids(&directory), vec!["a", "b", "c"]);
        assert!(directory.specialty_labels_visible());
    }

    #[test]
    fn specialty_filter_ignores_active_hospital_filter() {
        let mut directory = directory();
        directory.assign_hospitals(&["General".to_string(), "St. Luke".to_string()]);
        directory.filter_by_hospital("St. Luke");

        directory.filter_by_specialty("cardiology");

        // a and c are General doctors, yet both show up
        assert_eq!(visible_ids(&directory), vec!["a", "c"]);
        assert_eq!(directory.banner().title, "Book at St. Luke");
    }
}
