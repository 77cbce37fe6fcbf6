//! Application state definitions

use crate::state::forms::ApplicationForm;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// The five-step application wizard
    #[default]
    Wizard,
    /// Post-submission confirmation (terminal state)
    Confirmation,
}

/// One step of the application wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Personal,
    Career,
    Context,
    Project,
    Review,
}

impl WizardStep {
    /// 1-based step number shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Career => 2,
            Self::Context => 3,
            Self::Project => 4,
            Self::Review => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal and Contact Information",
            Self::Career => "Career and Educational Background",
            Self::Context => "Fellowship Context and Contribution",
            Self::Project => "Project and Funding",
            Self::Review => "Review and Submit",
        }
    }

    /// The step after this one; `None` from the review step, which only
    /// exits via submission.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Career),
            Self::Career => Some(Self::Context),
            Self::Context => Some(Self::Project),
            Self::Project => Some(Self::Review),
            Self::Review => None,
        }
    }

    /// The step before this one; `None` from the first step
    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Career => Some(Self::Personal),
            Self::Context => Some(Self::Career),
            Self::Project => Some(Self::Context),
            Self::Review => Some(Self::Project),
        }
    }

    pub fn is_review(&self) -> bool {
        matches!(self, Self::Review)
    }
}

/// Whether the follow-up CV upload happened, and how it went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvUploadStatus {
    /// No CV was attached, so no upload request was issued
    NotAttached,
    Uploaded {
        url: String,
    },
    /// The application record exists but the upload failed; there is no
    /// rollback on the backend, so the record is kept and the failure is
    /// surfaced to the applicant.
    Failed {
        reason: String,
    },
}

/// What a successful submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub application_id: String,
    pub cv_upload: CvUploadStatus,
}

/// Complete state of the running TUI
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub step: WizardStep,
    pub form: ApplicationForm,
    /// Index into the current step's active fields; the index one past the
    /// last field is the buttons row.
    pub active_field: usize,
    pub selected_button: usize,
    /// True while the submit request is in flight (the submit control is
    /// disabled for the duration)
    pub submitting: bool,
    pub error_message: Option<String>,
    pub missing_fields: Vec<&'static str>,
    pub review_scroll: u16,
    pub receipt: Option<SubmissionReceipt>,
}

impl AppState {
    /// Number of navigable slots on the current step: every active field
    /// plus the trailing buttons row.
    pub fn slot_count(&self) -> usize {
        self.form.active_fields(self.step.number()).len() + 1
    }

    /// True when focus sits on the buttons row
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field + 1 >= self.slot_count()
    }

    /// Buttons shown for the current step, in left-to-right order
    pub fn buttons(&self) -> &'static [&'static str] {
        match self.step {
            WizardStep::Personal => &["Next"],
            WizardStep::Review => &["Back", "Submit"],
            _ => &["Back", "Next"],
        }
    }

    /// Move focus to the next slot (wraps around)
    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.slot_count();
    }

    /// Move focus to the previous slot (wraps around)
    pub fn prev_field(&mut self) {
        let count = self.slot_count();
        self.active_field = (self.active_field + count - 1) % count;
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % self.buttons().len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        self.selected_button = (self.selected_button + count - 1) % count;
    }

    /// Clamp focus after the set of active fields changed (a conditional
    /// field appeared or disappeared)
    pub fn clamp_active_field(&mut self) {
        let max = self.slot_count() - 1;
        if self.active_field > max {
            self.active_field = max;
        }
    }

    /// Surface an error above the form
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Dismiss the error banner
    pub fn clear_error(&mut self) {
        self.error_message = None;
        self.missing_fields.clear();
    }

    /// Reset to a fresh wizard for a new application
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_and_order() {
        let mut step = WizardStep::default();
        assert_eq!(step.number(), 1);
        for expected in 2..=5 {
            step = step.next().unwrap();
            assert_eq!(step.number(), expected);
        }
        assert!(step.is_review());
        assert!(step.next().is_none());
    }

    #[test]
    fn test_retreat_stops_at_first_step() {
        assert_eq!(WizardStep::Career.prev(), Some(WizardStep::Personal));
        assert!(WizardStep::Personal.prev().is_none());
    }

    #[test]
    fn test_buttons_per_step() {
        let mut state = AppState::default();
        assert_eq!(state.buttons(), &["Next"]);
        state.step = WizardStep::Project;
        assert_eq!(state.buttons(), &["Back", "Next"]);
        state.step = WizardStep::Review;
        assert_eq!(state.buttons(), &["Back", "Submit"]);
    }

    #[test]
    fn test_field_navigation_wraps_through_buttons_row() {
        let mut state = AppState::default();
        // Step 1 has 10 active fields plus the buttons row
        assert_eq!(state.slot_count(), 11);
        for _ in 0..10 {
            assert!(!state.is_buttons_row_active());
            state.next_field();
        }
        assert!(state.is_buttons_row_active());
        state.next_field();
        assert_eq!(state.active_field, 0);
        state.prev_field();
        assert!(state.is_buttons_row_active());
    }

    #[test]
    fn test_review_step_only_has_buttons_row() {
        let mut state = AppState::default();
        state.step = WizardStep::Review;
        assert_eq!(state.slot_count(), 1);
        assert!(state.is_buttons_row_active());
    }

    #[test]
    fn test_clamp_after_conditional_disappears() {
        let mut state = AppState::default();
        state.step = WizardStep::Career;
        state.form.education_level.set("Other".to_string());
        // Focus the buttons row (4 fields + buttons = 5 slots)
        state.active_field = 4;
        state.form.education_level.set("Master's Degree".to_string());
        state.clamp_active_field();
        assert_eq!(state.active_field, 3);
        assert!(state.is_buttons_row_active());
    }

    #[test]
    fn test_button_navigation_wraps() {
        let mut state = AppState::default();
        state.step = WizardStep::Review;
        state.next_button();
        assert_eq!(state.selected_button, 1);
        state.next_button();
        assert_eq!(state.selected_button, 0);
        state.prev_button();
        assert_eq!(state.selected_button, 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = AppState::default();
        state.form.first_name.set("Amina".to_string());
        state.step = WizardStep::Review;
        state.push_error("boom");
        state.reset();
        assert_eq!(state.step, WizardStep::Personal);
        assert!(!state.form.first_name.is_present());
        assert!(state.error_message.is_none());
    }
}
