use std::time::Duration;

use client::models::AttendanceConfirmation;
use client::{ApiClient, ClientError};
use log::{debug, error};

use crate::app::Route;
use crate::ui::control::Control;
use crate::ui::message::{MessageRegion, Severity};

const LABEL_CONTINUE: &str = "Continue";
const LABEL_CHECKING: &str = "Checking...";
const LABEL_MARK: &str = "Mark Attendance";
const LABEL_MARKING: &str = "Marking...";
const MSG_NOT_FOUND: &str =
    "Registration number not found. Please register first or check your number.";
const MSG_TRY_AGAIN: &str = "An error occurred. Please try again.";

/// The two-step attendance flow. Exactly one panel follows from the state
/// at any time; step 2 reuses the `reg_number` carried in the state rather
/// than re-reading the input.
#[derive(Debug, Default)]
pub enum FlowState {
    #[default]
    AwaitingRegNumber,
    AwaitingSessionCode {
        reg_number: String,
        full_name: String,
    },
    Completed(AttendanceConfirmation),
}

#[derive(Debug)]
pub struct AttendancePage {
    state: FlowState,
    pub reg_number_input: String,
    pub session_code_input: String,
    step1_message: MessageRegion,
    step2_message: MessageRegion,
    check: Control,
    submit: Control,
    registration_offer: bool,
    prompt_delay: Duration,
}

impl AttendancePage {
    pub fn new(prompt_delay: Duration) -> Self {
        Self {
            state: FlowState::AwaitingRegNumber,
            reg_number_input: String::new(),
            session_code_input: String::new(),
            step1_message: MessageRegion::default(),
            step2_message: MessageRegion::default(),
            check: Control::new(LABEL_CONTINUE),
            submit: Control::new(LABEL_MARK),
            registration_offer: false,
            prompt_delay,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn step1_message(&self) -> &MessageRegion {
        &self.step1_message
    }

    pub fn step2_message(&self) -> &MessageRegion {
        &self.step2_message
    }

    pub fn check_control(&self) -> &Control {
        &self.check
    }

    pub fn submit_control(&self) -> &Control {
        &self.submit
    }

    /// Whether the page currently offers a jump to the registration page.
    /// The offer is advisory; the user may ignore it and retry.
    pub fn offers_registration(&self) -> bool {
        self.registration_offer
    }

    pub fn accept_registration_offer(&self) -> Option<Route> {
        self.registration_offer.then_some(Route::Register)
    }

    /// Step 1: verify the registration number exists. On success the flow
    /// advances and the next prompt is the session code.
    pub async fn check_member(&mut self, api: &ApiClient) {
        self.check.begin(LABEL_CHECKING);
        self.step1_message.hide();
        self.registration_offer = false;
        let unknown_member = self.check_member_inner(api).await;
        self.check.finish();
        if unknown_member {
            tokio::time::sleep(self.prompt_delay).await;
            self.registration_offer = true;
        }
    }

    /// Returns true when the lookup succeeded but found no member.
    async fn check_member_inner(&mut self, api: &ApiClient) -> bool {
        let reg_number = self.reg_number_input.trim().to_owned();
        match api.check_member(&reg_number).await {
            Ok(check) if check.exists => {
                let full_name = check
                    .member
                    .map(|member| member.full_name)
                    .unwrap_or_default();
                self.state = FlowState::AwaitingSessionCode {
                    reg_number,
                    full_name,
                };
                false
            }
            Ok(_) => {
                self.step1_message.show(MSG_NOT_FOUND, Severity::Error);
                true
            }
            Err(ClientError::Api(api_error)) => {
                debug!("member check rejected: code={:?}", api_error.code);
                self.step1_message
                    .show(api_error.message.clone(), Severity::Error);
                false
            }
            Err(err) => {
                error!("member check failed: {err}");
                self.step1_message.show(MSG_TRY_AGAIN, Severity::Error);
                false
            }
        }
    }

    /// Step 2: submit the session code for the checked member.
    pub async fn mark_attendance(&mut self, api: &ApiClient) {
        self.submit.begin(LABEL_MARKING);
        self.step2_message.hide();
        self.mark_attendance_inner(api).await;
        self.submit.finish();
    }

    async fn mark_attendance_inner(&mut self, api: &ApiClient) {
        let FlowState::AwaitingSessionCode { reg_number, .. } = &self.state else {
            return;
        };
        let reg_number = reg_number.clone();
        let session_code = self.session_code_input.trim().to_owned();

        match api.mark_attendance(&reg_number, &session_code).await {
            Ok(confirmation) => {
                self.state = FlowState::Completed(confirmation);
            }
            Err(ClientError::Api(api_error)) => {
                debug!("mark attendance rejected: code={:?}", api_error.code);
                let text = format!(
                    "{}: {}",
                    api_error.message,
                    api_error.detail_text().unwrap_or_default()
                );
                self.step2_message.show(text, Severity::Error);
            }
            Err(err) => {
                error!("mark attendance failed: {err}");
                self.step2_message.show(MSG_TRY_AGAIN, Severity::Error);
            }
        }
    }

    /// Back to step 1 with inputs, messages and the registration offer
    /// cleared. Pure state transition, no I/O.
    pub fn reset(&mut self) {
        self.state = FlowState::AwaitingRegNumber;
        self.reg_number_input.clear();
        self.session_code_input.clear();
        self.step1_message.hide();
        self.step2_message.hide();
        self.registration_offer = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_returns_to_the_initial_panel_from_any_state() {
        let mut page = AttendancePage::new(Duration::ZERO);
        page.reg_number_input = "T/DEG/2024/0042".into();
        page.session_code_input = "NET30JAN".into();
        page.step1_message.show("stale", Severity::Error);
        page.step2_message.show("stale", Severity::Error);
        page.registration_offer = true;
        page.state = FlowState::Completed(AttendanceConfirmation {
            full_name: "Jane Doe".into(),
            session_date: "2026-01-30".into(),
            department: "Networking".into(),
            reg_number: None,
            message: None,
        });

        page.reset();

        assert!(matches!(page.state(), FlowState::AwaitingRegNumber));
        assert!(page.reg_number_input.is_empty());
        assert!(page.session_code_input.is_empty());
        assert!(!page.step1_message().is_visible());
        assert!(!page.step2_message().is_visible());
        assert!(!page.offers_registration());
    }

    #[tokio::test]
    async fn marking_outside_step_two_is_a_no_op() {
        // never reached: the handler bails before building a request
        let api = ApiClient::new(url::Url::parse("http://127.0.0.1:9").unwrap());
        let mut page = AttendancePage::new(Duration::ZERO);

        page.mark_attendance(&api).await;

        assert!(matches!(page.state(), FlowState::AwaitingRegNumber));
        assert!(!page.step2_message().is_visible());
        assert!(page.submit_control().is_enabled());
        assert!(page.accept_registration_offer().is_none());
    }
}
