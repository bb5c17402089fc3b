use log::debug;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::envelope::Envelope;
use crate::error::ClientError;
use crate::models::{
    AttendanceConfirmation, Health, MarkAttendanceRequest, MemberCheck, MemberCheckRequest,
    Registered, RegistrationRequest, SessionInfo,
};

/// JSON client for the attendance API. One request per call, no retries.
/// No request timeout is configured; the environment default applies.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// `GET /api/session-info`
    pub async fn session_info(&self) -> Result<SessionInfo, ClientError> {
        let url = self.endpoint("/api/session-info")?;
        debug!("GET {url}");
        let envelope: Envelope<SessionInfo> = self.http.get(url).send().await?.json().await?;
        let (info, _) = envelope.into_result()?;
        Ok(info)
    }

    /// `POST /api/register`
    pub async fn register(&self, request: &RegistrationRequest) -> Result<Registered, ClientError> {
        let url = self.endpoint("/api/register")?;
        debug!("POST {url} reg_number={}", request.reg_number);
        // The member record echoed in `data` is unused; decode leniently so
        // a dataless success still counts as registered.
        let envelope: Envelope<Value> = self
            .http
            .post(url)
            .json(request)
            .send()
            .await?
            .json()
            .await?;
        if envelope.success {
            Ok(Registered {
                message: envelope.message,
            })
        } else {
            Err(ClientError::Api(envelope.api_error()))
        }
    }

    /// `POST /api/check-member`
    pub async fn check_member(&self, reg_number: &str) -> Result<MemberCheck, ClientError> {
        let url = self.endpoint("/api/check-member")?;
        debug!("POST {url} reg_number={reg_number}");
        let body = MemberCheckRequest {
            reg_number: reg_number.to_owned(),
        };
        let envelope: Envelope<MemberCheck> =
            self.http.post(url).json(&body).send().await?.json().await?;
        let (check, _) = envelope.into_result()?;
        Ok(check)
    }

    /// `POST /api/mark-attendance`
    pub async fn mark_attendance(
        &self,
        reg_number: &str,
        session_code: &str,
    ) -> Result<AttendanceConfirmation, ClientError> {
        let url = self.endpoint("/api/mark-attendance")?;
        debug!("POST {url} reg_number={reg_number}");
        let body = MarkAttendanceRequest {
            reg_number: reg_number.to_owned(),
            session_code: session_code.to_owned(),
        };
        let envelope: Envelope<AttendanceConfirmation> =
            self.http.post(url).json(&body).send().await?.json().await?;
        let (confirmation, _) = envelope.into_result()?;
        Ok(confirmation)
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<Health, ClientError> {
        let url = self.endpoint("/api/health")?;
        debug!("GET {url}");
        Ok(self.http.get(url).send().await?.json().await?)
    }
}
