use client::{ApiClient, ClientError};
use log::error;

use client::models::{NextSession, SessionDetails};

/// What the landing page shows for the current session.
#[derive(Debug, Default)]
pub enum StatusView {
    #[default]
    Loading,
    Session(SessionDetails),
    NoSession {
        message: String,
        next_session: Option<NextSession>,
    },
    Unavailable,
}

#[derive(Debug, Default)]
pub struct HomePage {
    view: StatusView,
}

impl HomePage {
    pub fn view(&self) -> &StatusView {
        &self.view
    }

    /// Issues exactly one session-info request and always resolves
    /// `Loading` into a terminal view.
    pub async fn load(&mut self, api: &ApiClient) {
        self.view = match api.session_info().await {
            Ok(info) if info.has_session => match info.session {
                Some(details) => StatusView::Session(details),
                None => {
                    error!("session-info reported has_session without a session body");
                    StatusView::Unavailable
                }
            },
            Ok(info) => StatusView::NoSession {
                message: info
                    .message
                    .unwrap_or_else(|| "No session scheduled for this week".to_owned()),
                next_session: info.next_session,
            },
            Err(err) => {
                log_load_failure(&err);
                StatusView::Unavailable
            }
        };
    }
}

fn log_load_failure(err: &ClientError) {
    match err.as_api() {
        Some(api_error) => error!(
            "session-info rejected: code={:?} message={}",
            api_error.code, api_error.message
        ),
        None => error!("failed to load session info: {err}"),
    }
}
