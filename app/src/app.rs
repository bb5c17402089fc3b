use std::time::Duration;

use client::ApiClient;
use client::models::AttendanceConfirmation;

use crate::pages::attendance::{AttendancePage, FlowState};
use crate::pages::home::{HomePage, StatusView};
use crate::pages::register::{COURSES, DEPARTMENTS, GENDERS, RegisterPage};
use crate::ui::message::{MessageRegion, Severity};
use crate::ui::prompt::Prompt;

/// Client-side navigation targets, mirroring the site's `/`, `/register`
/// and `/attendance` pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Register,
    Attendance,
}

/// Drives the pages: renders their view state and feeds them line input.
/// One request is in flight per user action, never more.
pub struct App {
    api: ApiClient,
    prompt: Prompt,
    redirect_delay: Duration,
    prompt_delay: Duration,
}

impl App {
    pub fn new(api: ApiClient, redirect_delay: Duration, prompt_delay: Duration) -> Self {
        Self {
            api,
            prompt: Prompt::new(),
            redirect_delay,
            prompt_delay,
        }
    }

    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut route = Route::Home;
        loop {
            route = match route {
                Route::Home => match self.home().await? {
                    Some(next) => next,
                    None => return Ok(()),
                },
                Route::Register => self.register().await?,
                Route::Attendance => self.attendance().await?,
            };
        }
    }

    async fn home(&mut self) -> std::io::Result<Option<Route>> {
        let mut page = HomePage::default();
        page.load(&self.api).await;
        render_status(page.view());

        loop {
            let choice = self
                .prompt
                .line("[1] Register  [2] Mark attendance  [q] Quit")
                .await?;
            match choice.as_str() {
                "1" => return Ok(Some(Route::Register)),
                "2" => return Ok(Some(Route::Attendance)),
                "q" | "Q" => return Ok(None),
                _ => {}
            }
        }
    }

    async fn register(&mut self) -> std::io::Result<Route> {
        let mut page = RegisterPage::new(self.redirect_delay);
        println!("\n== Member registration ==");

        loop {
            self.fill_form(&mut page).await?;
            let next = page.submit(&self.api).await;
            render_message(page.message());
            if let Some(route) = next {
                return Ok(route);
            }

            let choice = self.prompt.line("[Enter] Edit and retry  [b] Back").await?;
            if choice.eq_ignore_ascii_case("b") {
                return Ok(Route::Home);
            }
        }
    }

    async fn fill_form(&mut self, page: &mut RegisterPage) -> std::io::Result<()> {
        let form = &mut page.form;
        form.reg_number = self
            .prompt
            .line_with_default("Registration number", &form.reg_number)
            .await?;
        form.full_name = self
            .prompt
            .line_with_default("Full name", &form.full_name)
            .await?;
        form.email = self.prompt.line_with_default("Email", &form.email).await?;
        form.phone = self.prompt.line_with_default("Phone", &form.phone).await?;
        form.gender = self
            .prompt
            .line_with_default(&format!("Gender ({})", GENDERS.join("/")), &form.gender)
            .await?;
        let year = self
            .prompt
            .line_with_default("Year of study (1-3)", &form.year_of_study.to_string())
            .await?;
        form.year_of_study = year.parse().unwrap_or(form.year_of_study);
        form.course = self
            .prompt
            .line_with_default(&format!("Course ({})", COURSES.join("/")), &form.course)
            .await?;
        form.departments = self.prompt.multi_select("Departments", &DEPARTMENTS).await?;
        Ok(())
    }

    async fn attendance(&mut self) -> std::io::Result<Route> {
        let mut page = AttendancePage::new(self.prompt_delay);
        println!("\n== Mark attendance ==");

        loop {
            match page.state() {
                FlowState::AwaitingRegNumber => {
                    render_message(page.step1_message());
                    if page.offers_registration() {
                        let choice = self
                            .prompt
                            .line("[r] Register now  [Enter] Try another number  [b] Back")
                            .await?;
                        match choice.as_str() {
                            "r" | "R" => {
                                if let Some(route) = page.accept_registration_offer() {
                                    return Ok(route);
                                }
                            }
                            "b" | "B" => return Ok(Route::Home),
                            _ => {}
                        }
                    }
                    let entered = self
                        .prompt
                        .line("Registration number ('b' to go back)")
                        .await?;
                    if entered.eq_ignore_ascii_case("b") {
                        return Ok(Route::Home);
                    }
                    page.reg_number_input = entered;
                    page.check_member(&self.api).await;
                }
                FlowState::AwaitingSessionCode { full_name, .. } => {
                    println!("Welcome, {full_name}!");
                    render_message(page.step2_message());
                    page.session_code_input = self.prompt.line("Session code").await?;
                    page.mark_attendance(&self.api).await;
                }
                FlowState::Completed(confirmation) => {
                    render_confirmation(confirmation);
                    let choice = self
                        .prompt
                        .line("[m] Mark another attendance  [b] Back")
                        .await?;
                    match choice.as_str() {
                        "m" | "M" => page.reset(),
                        "b" | "B" => return Ok(Route::Home),
                        _ => {}
                    }
                }
            }
        }
    }
}

fn render_status(view: &StatusView) {
    println!();
    match view {
        StatusView::Loading => println!("Loading session information..."),
        StatusView::Session(details) => {
            let window = &details.attendance_window;
            println!("{}, {}", details.day, details.date);
            println!("Department: {}", details.department);
            if let Some(description) = &details.description {
                println!("{description}");
            }
            println!("Time: {}", details.time);
            println!(
                "Status: attendance window is {}",
                if window.is_active { "OPEN" } else { "CLOSED" }
            );
            if window.is_active {
                if let Some(remaining) = &window.time_remaining {
                    println!("Time remaining: {remaining}");
                }
            } else if let Some(reason) = &window.reason {
                println!("{reason}");
            }
        }
        StatusView::NoSession {
            message,
            next_session,
        } => {
            println!("{message}");
            if let Some(next) = next_session {
                println!("Next session: {} ({})", next.date, next.department);
            }
        }
        StatusView::Unavailable => println!("Unable to load session information"),
    }
}

fn render_message(message: &MessageRegion) {
    if !message.is_visible() {
        return;
    }
    match message.severity() {
        Severity::Error => println!("!! {}", message.text()),
        Severity::Success => println!("ok {}", message.text()),
        Severity::Info => println!("-- {}", message.text()),
    }
}

fn render_confirmation(confirmation: &AttendanceConfirmation) {
    println!("\nAttendance recorded:");
    println!("  Name:       {}", confirmation.full_name);
    println!("  Date:       {}", confirmation.session_date);
    println!("  Department: {}", confirmation.department);
}
