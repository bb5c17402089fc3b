use std::time::Duration;

use client::models::RegistrationRequest;
use client::{ApiClient, ClientError};
use log::{debug, error};

use crate::app::Route;
use crate::ui::control::Control;
use crate::ui::message::{MessageRegion, Severity};

/// Choices offered on the registration page. The server validates the same
/// sets on its side.
pub const DEPARTMENTS: [&str; 6] = [
    "Cybersecurity",
    "Programming",
    "Networking",
    "Computer Maintenance",
    "Graphic Design",
    "AI & Machine Learning",
];
pub const COURSES: [&str; 2] = ["ICT", "CS"];
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

const LABEL_REGISTER: &str = "Register";
const LABEL_REGISTERING: &str = "Registering...";
const MSG_NO_DEPARTMENT: &str = "Please select at least one department";
const MSG_REGISTERED: &str = "Registration successful!";
const MSG_TRY_AGAIN: &str = "An error occurred. Please try again.";

/// Fields collected on the registration page.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub reg_number: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub year_of_study: u32,
    pub course: String,
    pub departments: Vec<String>,
}

impl RegistrationForm {
    fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            reg_number: self.reg_number.trim().to_owned(),
            full_name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            gender: self.gender.clone(),
            year_of_study: self.year_of_study,
            course: self.course.clone(),
            departments: self.departments.clone(),
        }
    }
}

#[derive(Debug)]
pub struct RegisterPage {
    pub form: RegistrationForm,
    message: MessageRegion,
    submit: Control,
    redirect_delay: Duration,
}

impl RegisterPage {
    pub fn new(redirect_delay: Duration) -> Self {
        Self {
            form: RegistrationForm::default(),
            message: MessageRegion::default(),
            submit: Control::new(LABEL_REGISTER),
            redirect_delay,
        }
    }

    pub fn message(&self) -> &MessageRegion {
        &self.message
    }

    pub fn submit_control(&self) -> &Control {
        &self.submit
    }

    /// Submits the collected form. Returns the route to navigate to after a
    /// successful registration; the redirect pause happens here, after the
    /// control has been re-enabled.
    pub async fn submit(&mut self, api: &ApiClient) -> Option<Route> {
        self.submit.begin(LABEL_REGISTERING);
        self.message.hide();
        let route = self.submit_inner(api).await;
        self.submit.finish();
        if route.is_some() {
            tokio::time::sleep(self.redirect_delay).await;
        }
        route
    }

    async fn submit_inner(&mut self, api: &ApiClient) -> Option<Route> {
        if self.form.departments.is_empty() {
            self.message.show(MSG_NO_DEPARTMENT, Severity::Error);
            return None;
        }

        match api.register(&self.form.to_request()).await {
            Ok(ack) => {
                self.message.show(
                    ack.message.unwrap_or_else(|| MSG_REGISTERED.to_owned()),
                    Severity::Success,
                );
                self.form = RegistrationForm::default();
                Some(Route::Attendance)
            }
            Err(ClientError::Api(api_error)) => {
                debug!("registration rejected: code={:?}", api_error.code);
                let mut text = api_error.message.clone();
                if let Some(details) = api_error.detail_text() {
                    text.push_str(": ");
                    text.push_str(&details);
                }
                // Form kept as-is for correction.
                self.message.show(text, Severity::Error);
                None
            }
            Err(err) => {
                error!("registration request failed: {err}");
                self.message.show(MSG_TRY_AGAIN, Severity::Error);
                None
            }
        }
    }
}
