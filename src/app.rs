//! Application state and core logic

use crate::client::{self, PortalClient, SubmitError};
use crate::config::TuiConfig;
use crate::state::{validate_step, AppState, SubmissionReceipt, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the portal backend
    client: PortalClient,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        let client = PortalClient::new(config.resolve_portal_url());
        Self {
            state: AppState::default(),
            client,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key).await,
            View::Confirmation => self.handle_confirmation_key(key),
        }
        Ok(())
    }

    async fn handle_wizard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.clear_error(),
            KeyCode::Tab => self.state.next_field(),
            KeyCode::BackTab => self.state.prev_field(),
            KeyCode::Down => {
                if self.state.step.is_review() {
                    self.state.review_scroll = self.state.review_scroll.saturating_add(1);
                } else {
                    self.state.next_field();
                }
            }
            KeyCode::Up => {
                if self.state.step.is_review() {
                    self.state.review_scroll = self.state.review_scroll.saturating_sub(1);
                } else {
                    self.state.prev_field();
                }
            }
            KeyCode::Left => {
                if self.state.is_buttons_row_active() {
                    self.state.prev_button();
                } else {
                    self.cycle_active_choice(false);
                }
            }
            KeyCode::Right => {
                if self.state.is_buttons_row_active() {
                    self.state.next_button();
                } else {
                    self.cycle_active_choice(true);
                }
            }
            KeyCode::Enter => {
                if self.state.is_buttons_row_active() {
                    self.activate_selected_button().await;
                } else if self.active_field_is_multiline() {
                    self.edit_active_field(|f| f.push_char('\n'));
                } else {
                    self.state.next_field();
                }
            }
            KeyCode::Backspace => self.edit_active_field(|f| f.pop_char()),
            KeyCode::Char(c) => self.edit_active_field(|f| f.push_char(c)),
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('n') => self.state.reset(),
            _ => {}
        }
    }

    fn active_field_is_multiline(&self) -> bool {
        let fields = self.state.form.active_fields(self.state.step.number());
        fields
            .get(self.state.active_field)
            .is_some_and(|f| f.is_multiline)
    }

    fn edit_active_field(&mut self, edit: impl FnOnce(&mut crate::state::FormField)) {
        if self.state.is_buttons_row_active() {
            return;
        }
        let fields = self.state.form.active_fields(self.state.step.number());
        let Some(name) = fields.get(self.state.active_field).map(|f| f.name) else {
            return;
        };
        if let Some(field) = self.state.form.field_mut(name) {
            edit(field);
        }
    }

    fn cycle_active_choice(&mut self, forward: bool) {
        self.edit_active_field(|f| {
            if forward {
                f.cycle_next();
            } else {
                f.cycle_prev();
            }
        });
        // Changing a trigger choice can add or remove conditional fields
        self.state.clamp_active_field();
    }

    async fn activate_selected_button(&mut self) {
        match self.state.buttons()[self.state.selected_button] {
            "Back" => self.retreat(),
            "Next" => self.advance(),
            "Submit" => self.submit_application().await,
            _ => {}
        }
    }

    /// Advance to the next step, gated on the current step validating
    pub fn advance(&mut self) {
        let result = validate_step(&self.state.form, self.state.step.number());
        if !result.is_valid {
            self.state.missing_fields = result.missing_field_labels;
            self.state
                .push_error("Please complete the following required fields:");
            return;
        }
        if let Some(next) = self.state.step.next() {
            self.state.step = next;
            self.enter_step();
        }
    }

    /// Go back one step; never validated
    pub fn retreat(&mut self) {
        if let Some(prev) = self.state.step.prev() {
            self.state.step = prev;
            self.enter_step();
        }
    }

    fn enter_step(&mut self) {
        self.state.active_field = 0;
        self.state.selected_button = self.state.buttons().len() - 1;
        self.state.review_scroll = 0;
        self.state.clear_error();
    }

    /// Submit from the review step. The control is disabled while a request
    /// is in flight; there is no automatic retry.
    async fn submit_application(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.submitting = true;
        self.state.clear_error();
        let result = client::submit(&self.client, &self.state.form).await;
        self.state.submitting = false;
        self.apply_submit_result(result);
    }

    /// Fold a submission outcome back into the app state. A failure keeps
    /// the wizard on the review step with an inline error.
    fn apply_submit_result(&mut self, result: Result<SubmissionReceipt, SubmitError>) {
        match result {
            Ok(receipt) => {
                tracing::info!(id = %receipt.application_id, "submission complete");
                self.state.receipt = Some(receipt);
                self.state.current_view = View::Confirmation;
            }
            Err(SubmitError::Validation(labels)) => {
                self.state.missing_fields = labels;
                self.state.push_error(
                    "Please complete the following required fields before submitting:",
                );
            }
            Err(err) => self.state.push_error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CvUploadStatus, WizardStep};
    use anyhow::anyhow;
    use crossterm::event::KeyEvent;

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn fill_step_1(app: &mut App) {
        let form = &mut app.state.form;
        form.title.set("Dr.".to_string());
        form.first_name.set("Amina".to_string());
        form.last_name.set("Uwase".to_string());
        form.gender.set("Female".to_string());
        form.email.set("amina@example.org".to_string());
        form.nationality.set("Rwandan".to_string());
        form.country_of_residence.set("Rwanda".to_string());
        form.phone.set("+250788123456".to_string());
        form.address.set("KG 7 Ave, Kigali".to_string());
    }

    #[tokio::test]
    async fn test_advance_blocked_while_step_invalid() {
        let mut app = app();
        app.advance();
        assert_eq!(app.state.step, WizardStep::Personal);
        assert!(app.state.error_message.is_some());
        assert!(app.state.missing_fields.contains(&"First Name"));
    }

    #[tokio::test]
    async fn test_advance_moves_once_step_is_valid() {
        let mut app = app();
        fill_step_1(&mut app);
        app.advance();
        assert_eq!(app.state.step, WizardStep::Career);
        assert!(app.state.error_message.is_none());
        assert_eq!(app.state.active_field, 0);
    }

    #[tokio::test]
    async fn test_retreat_is_unconditional() {
        let mut app = app();
        app.state.step = WizardStep::Context;
        app.retreat();
        assert_eq!(app.state.step, WizardStep::Career);
        app.retreat();
        app.retreat();
        // Already at the first step
        assert_eq!(app.state.step, WizardStep::Personal);
    }

    #[tokio::test]
    async fn test_typing_edits_the_active_field() {
        let mut app = app();
        // Field 0 is the title choice; Tab to firstName
        app.handle_key(key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "Amina").await;
        assert_eq!(app.state.form.first_name.as_text(), "Amina");
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();
        assert_eq!(app.state.form.first_name.as_text(), "Amin");
    }

    #[tokio::test]
    async fn test_arrows_cycle_choice_field() {
        let mut app = app();
        // Field 0 is the title choice
        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.state.form.title.as_text(), "Dr.");
        app.handle_key(key(KeyCode::Left)).await.unwrap();
        assert_eq!(app.state.form.title.as_text(), "Prof.");
    }

    #[tokio::test]
    async fn test_enter_on_next_button_validates() {
        let mut app = app();
        // Walk to the buttons row (10 fields on step 1)
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
        }
        assert!(app.state.is_buttons_row_active());
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        // Step 1 is empty, so the wizard stays put with an error
        assert_eq!(app.state.step, WizardStep::Personal);
        assert!(app.state.error_message.is_some());
    }

    #[tokio::test]
    async fn test_esc_dismisses_error_banner() {
        let mut app = app();
        app.advance();
        assert!(app.state.error_message.is_some());
        app.handle_key(key(KeyCode::Esc)).await.unwrap();
        assert!(app.state.error_message.is_none());
        assert!(app.state.missing_fields.is_empty());
    }

    #[tokio::test]
    async fn test_failed_submission_stays_on_review() {
        let mut app = app();
        app.state.step = WizardStep::Review;
        app.apply_submit_result(Err(SubmitError::Submission(anyhow!("connection refused"))));
        assert_eq!(app.state.current_view, View::Wizard);
        assert_eq!(app.state.step, WizardStep::Review);
        assert_eq!(
            app.state.error_message.as_deref(),
            Some("connection refused")
        );
        assert!(app.state.receipt.is_none());
    }

    #[tokio::test]
    async fn test_successful_submission_shows_confirmation() {
        let mut app = app();
        app.state.step = WizardStep::Review;
        app.apply_submit_result(Ok(SubmissionReceipt {
            application_id: "app_7".to_string(),
            cv_upload: CvUploadStatus::NotAttached,
        }));
        assert_eq!(app.state.current_view, View::Confirmation);
        assert_eq!(
            app.state.receipt.as_ref().unwrap().application_id,
            "app_7"
        );
    }

    #[tokio::test]
    async fn test_validation_failure_at_submit_lists_fields() {
        let mut app = app();
        app.state.step = WizardStep::Review;
        app.apply_submit_result(Err(SubmitError::Validation(vec![
            "Other Education Level",
            "Proof of Funding",
        ])));
        assert_eq!(
            app.state.missing_fields,
            vec!["Other Education Level", "Proof of Funding"]
        );
        assert!(app
            .state
            .error_message
            .as_deref()
            .unwrap()
            .starts_with("Please complete the following required fields"));
    }

    #[tokio::test]
    async fn test_new_application_resets_wizard() {
        let mut app = app();
        app.state.current_view = View::Confirmation;
        app.state.receipt = Some(SubmissionReceipt {
            application_id: "app_7".to_string(),
            cv_upload: CvUploadStatus::NotAttached,
        });
        app.handle_key(key(KeyCode::Char('n'))).await.unwrap();
        assert_eq!(app.state.current_view, View::Wizard);
        assert_eq!(app.state.step, WizardStep::Personal);
        assert!(app.state.receipt.is_none());
    }

    #[tokio::test]
    async fn test_quit_from_confirmation() {
        let mut app = app();
        app.state.current_view = View::Confirmation;
        app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        assert!(app.should_quit());
    }
}
