use shared_types::BookingPayload;

/// In-progress appointment selections for this page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingState {
    pub hospital_name: Option<String>,
    pub doctor_id: Option<String>,
    pub doctor_name: Option<String>,
    pub room_number: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl BookingState {
    pub fn to_payload(&self) -> BookingPayload {
        BookingPayload {
            hospital_name: self.hospital_name.clone(),
            doctor_id: self.doctor_id.clone(),
            doctor_name: self.doctor_name.clone(),
            room_number: self.room_number.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    SelectDoctor,
    SelectRoom,
    SelectTime,
    Confirm,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SelectDoctor,
        Step::SelectRoom,
        Step::SelectTime,
        Step::Confirm,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::SelectDoctor => None,
            Step::SelectRoom => Some(Step::SelectDoctor),
            Step::SelectTime => Some(Step::SelectRoom),
            Step::Confirm => Some(Step::SelectTime),
        }
    }
}

/// Visibility of one step container. `dimmed` is the half-opacity look a step
/// gets once the user has moved past it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepPanel {
    pub visible: bool,
    pub dimmed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepPanels([StepPanel; 4]);

impl Default for StepPanels {
    fn default() -> Self {
        let mut panels = [StepPanel::default(); 4];
        panels[Step::SelectDoctor.index()].visible = true;
        Self(panels)
    }
}

impl StepPanels {
    pub fn get(&self, step: Step) -> StepPanel {
        self.0[step.index()]
    }

    /// Deepest visible step.
    pub fn current(&self) -> Step {
        Step::ALL
            .iter()
            .rev()
            .copied()
            .find(|step| self.get(*step).visible)
            .unwrap_or(Step::SelectDoctor)
    }

    /// Dims `from`, reveals `to` and hides every step after `to`.
    pub(crate) fn advance(&mut self, from: Step, to: Step) {
        self.0[from.index()].dimmed = true;
        self.0[to.index()] = StepPanel {
            visible: true,
            dimmed: false,
        };
        for step in Step::ALL.iter().filter(|s| **s > to) {
            self.0[step.index()].visible = false;
        }
    }

    /// Hides the current step and restores the previous one. Returns the new
    /// current step, or `None` when already on the first step.
    pub(crate) fn back(&mut self) -> Option<Step> {
        let current = self.current();
        let previous = current.previous()?;
        self.0[current.index()].visible = false;
        self.0[previous.index()].dimmed = false;
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_step_starts_visible() {
        let panels = StepPanels::default();
        assert_eq!(panels.current(), Step::SelectDoctor);
        assert!(!panels.get(Step::SelectRoom).visible);
        assert!(!panels.get(Step::Confirm).visible);
    }

    #[test]
    fn advancing_hides_later_steps() {
        let mut panels = StepPanels::default();
        panels.advance(Step::SelectDoctor, Step::SelectRoom);
        panels.advance(Step::SelectRoom, Step::SelectTime);
        panels.advance(Step::SelectTime, Step::Confirm);

        panels.advance(Step::SelectDoctor, Step::SelectRoom);

        assert_eq!(panels.current(), Step::SelectRoom);
        assert!(!panels.get(Step::SelectTime).visible);
        assert!(!panels.get(Step::Confirm).visible);
        assert!(panels.get(Step::SelectDoctor).dimmed);
    }

    #[test]
    fn back_stops_at_the_first_step() {
        let mut panels = StepPanels::default();
        panels.advance(Step::SelectDoctor, Step::SelectRoom);

        assert_eq!(panels.back(), Some(Step::SelectDoctor));
        assert!(!panels.get(Step::SelectDoctor).dimmed);
        assert_eq!(panels.back(), None);
        assert!(panels.get(Step::SelectDoctor).visible);
    }

    #[test]
    fn payload_mirrors_state() {
        let state = BookingState {
            doctor_id: Some("3".to_string()),
            time: Some("09:00 AM".to_string()),
            ..Default::default()
        };
        let payload = state.to_payload();
        assert_eq!(payload.doctor_id.as_deref(), Some("3"));
        assert_eq!(payload.time.as_deref(), Some("09:00 AM"));
        assert!(payload.room_number.is_none());
    }
}
