use chrono::NaiveDate;
use shared_types::{BookingPayload, BookingReceipt};

use super::api::BookingApi;
use super::catalog::{BookingCatalog, Room, TimeSlot};
use super::directory::DoctorDirectory;
use super::error::{BookingError, ValidationError};
use super::state::{BookingState, Step, StepPanels};

pub const CONFIRM_LABEL: &str = "Confirm Booking";
pub const BOOKING_LABEL: &str = "Booking...";
pub const BOOKING_CONFIRMED: &str = "Booking Confirmed! A confirmation email has been sent.";
pub const BOOKING_FAILED: &str = "Failed to book appointment. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            disabled: false,
            label: CONFIRM_LABEL.to_string(),
        }
    }
}

/// What the confirm step shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationDetails {
    pub doctor: String,
    pub room: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, PartialEq)]
pub enum SubmissionOutcome {
    /// The page should acknowledge and then reload. The submit control stays disabled.
    Confirmed {
        message: String,
        receipt: BookingReceipt,
    },
    /// The submit control has been re-enabled and the selections kept for a retry.
    Failed { message: String, error: BookingError },
}

/// The booking flow: doctor, then room, then date and time, then confirmation.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingWizard {
    rooms: Vec<Room>,
    time_slots: Vec<TimeSlot>,
    directory: DoctorDirectory,
    state: BookingState,
    panels: StepPanels,
    selected_room: Option<String>,
    selected_slot: Option<String>,
    date_input: String,
    submit: SubmitControl,
}

impl BookingWizard {
    pub fn new(catalog: BookingCatalog) -> Self {
        Self {
            rooms: catalog.rooms,
            time_slots: catalog.time_slots,
            directory: DoctorDirectory::new(catalog.doctors),
            state: BookingState::default(),
            panels: StepPanels::default(),
            selected_room: None,
            selected_slot: None,
            date_input: String::new(),
            submit: SubmitControl::default(),
        }
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn directory(&self) -> &DoctorDirectory {
        &self.directory
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn panels(&self) -> &StepPanels {
        &self.panels
    }

    pub fn current_step(&self) -> Step {
        self.panels.current()
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn date_input(&self) -> &str {
        &self.date_input
    }

    pub fn is_doctor_selected(&self, doctor_id: &str) -> bool {
        self.state.doctor_id.as_deref() == Some(doctor_id)
    }

    pub fn is_room_selected(&self, label: &str) -> bool {
        self.selected_room.as_deref() == Some(label)
    }

    pub fn is_slot_selected(&self, label: &str) -> bool {
        self.selected_slot.as_deref() == Some(label)
    }

    pub fn assign_hospitals(&mut self, hospitals: &[String]) {
        self.directory.assign_hospitals(hospitals);
    }

    /// Narrows the doctor list to one hospital. When nobody works there the list
    /// falls back to every doctor and the hospital context is dropped.
    pub fn filter_by_hospital(&mut self, hospital: &str) -> usize {
        self.state.hospital_name = Some(hospital.to_string());
        let visible = self.directory.filter_by_hospital(hospital);
        if visible == 0 {
            self.clear_filter();
            self.directory.note_fallback(hospital);
        }
        visible
    }

    pub fn clear_filter(&mut self) {
        self.directory.show_all();
        self.state.hospital_name = None;
    }

    pub fn filter_by_specialty(&mut self, specialty: &str) {
        self.directory.filter_by_specialty(specialty);
    }

    pub fn select_doctor(&mut self, doctor_id: &str) -> Result<(), BookingError> {
        let entry = self
            .directory
            .get(doctor_id)
            .ok_or_else(|| ValidationError::UnknownDoctor(doctor_id.to_string()))?;

        self.state.hospital_name = entry.hospital.clone();
        self.state.doctor_id = Some(entry.doctor.id.clone());
        self.state.doctor_name = Some(entry.doctor.name.clone());
        self.panels.advance(Step::SelectDoctor, Step::SelectRoom);
        Ok(())
    }

    pub fn select_room(&mut self, label: &str) -> Result<(), BookingError> {
        if self.state.doctor_id.is_none() {
            return Err(ValidationError::DoctorNotSelected.into());
        }

        let label = label.trim();
        let room = self
            .rooms
            .iter()
            .find(|room| room.label.trim() == label && !label.is_empty())
            .ok_or_else(|| ValidationError::UnknownRoom(label.to_string()))?;

        let label = room.label.trim().to_string();
        self.state.room_number = Some(label.clone());
        self.selected_room = Some(label);
        self.panels.advance(Step::SelectRoom, Step::SelectTime);
        Ok(())
    }

    /// Mirrors the date input. Nothing is committed until a time slot is picked.
    pub fn set_date_input(&mut self, value: String) {
        self.date_input = value;
    }

    pub fn select_time_slot(&mut self, label: &str) -> Result<(), BookingError> {
        let label = label.trim();
        let slot_open = self
            .time_slots
            .iter()
            .any(|slot| slot.label.trim() == label && slot.is_available);
        if !slot_open {
            return Err(ValidationError::SlotUnavailable.into());
        }
        if self.date_input.trim().is_empty() {
            return Err(ValidationError::DateNotSelected.into());
        }
        if self.state.doctor_id.is_none() {
            return Err(ValidationError::DoctorNotSelected.into());
        }
        if self.state.room_number.is_none() {
            return Err(ValidationError::RoomNotSelected.into());
        }

        self.state.date = Some(self.date_input.trim().to_string());
        self.state.time = Some(label.to_string());
        self.selected_slot = Some(label.to_string());
        self.panels.advance(Step::SelectTime, Step::Confirm);
        Ok(())
    }

    pub fn back(&mut self) -> Option<Step> {
        self.panels.back()
    }

    pub fn confirmation(&self) -> ConfirmationDetails {
        ConfirmationDetails {
            doctor: self.state.doctor_name.clone().unwrap_or_default(),
            room: self.state.room_number.clone().unwrap_or_default(),
            date: self
                .state
                .date
                .as_deref()
                .map(format_long_date)
                .unwrap_or_default(),
            time: self.state.time.clone().unwrap_or_default(),
        }
    }

    /// Validates and locks the submit control. The caller sends the returned payload
    /// and hands the result to [`BookingWizard::finish_submission`].
    pub fn begin_submission(&mut self) -> Result<BookingPayload, BookingError> {
        if self.submit.disabled {
            return Err(BookingError::SubmissionInFlight);
        }
        if self.state.doctor_id.is_none() {
            return Err(ValidationError::DoctorNotSelected.into());
        }

        self.submit.disabled = true;
        self.submit.label = BOOKING_LABEL.to_string();
        Ok(self.state.to_payload())
    }

    pub fn finish_submission(
        &mut self,
        result: Result<BookingReceipt, BookingError>,
    ) -> SubmissionOutcome {
        match result {
            Ok(receipt) => SubmissionOutcome::Confirmed {
                message: BOOKING_CONFIRMED.to_string(),
                receipt,
            },
            Err(error) => {
                self.submit = SubmitControl::default();
                SubmissionOutcome::Failed {
                    message: BOOKING_FAILED.to_string(),
                    error,
                }
            }
        }
    }

    pub async fn confirm_booking<A: BookingApi>(
        &mut self,
        api: &A,
    ) -> Result<SubmissionOutcome, BookingError> {
        let payload = self.begin_submission()?;
        let result = api.submit(&payload).await;
        Ok(self.finish_submission(result))
    }
}

/// `2025-03-10` becomes `Monday, March 10, 2025`.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%A, %B %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
