use serde::{Deserialize, Serialize};

// ---------------------------
// Request payloads
// ---------------------------

/// Body of `POST /api/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    pub reg_number: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub year_of_study: u32,
    pub course: String,
    pub departments: Vec<String>,
}

/// Body of `POST /api/check-member`.
#[derive(Debug, Serialize)]
pub struct MemberCheckRequest {
    pub reg_number: String,
}

/// Body of `POST /api/mark-attendance`.
#[derive(Debug, Serialize)]
pub struct MarkAttendanceRequest {
    pub reg_number: String,
    pub session_code: String,
}

// ---------------------------
// Response payloads
// ---------------------------

/// Data of `GET /api/session-info`. `message` and `next_session` are only
/// populated when `has_session` is false.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInfo {
    pub has_session: bool,
    #[serde(default)]
    pub session: Option<SessionDetails>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub next_session: Option<NextSession>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionDetails {
    pub date: String,
    pub day: String,
    pub department: String,
    #[serde(default)]
    pub description: Option<String>,
    pub time: String,
    pub attendance_window: AttendanceWindow,
}

/// The server-determined range during which marking is permitted.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceWindow {
    pub is_active: bool,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_remaining: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NextSession {
    pub date: String,
    pub department: String,
}

/// Data of `POST /api/check-member`. `member` accompanies `exists: true`.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberCheck {
    pub exists: bool,
    #[serde(default)]
    pub member: Option<Member>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub full_name: String,
    #[serde(default)]
    pub reg_number: Option<String>,
}

/// Acknowledgement of a successful registration. The server echoes the
/// member record in `data`; only the top-level message is of use here.
#[derive(Debug, Clone)]
pub struct Registered {
    pub message: Option<String>,
}

/// Data of a successful `POST /api/mark-attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfirmation {
    pub full_name: String,
    pub session_date: String,
    pub department: String,
    #[serde(default)]
    pub reg_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/health`, a plain payload not wrapped in the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
