//! Blocking uploads, for callers without an async runtime.
//!
//! Mirrors [`crate::Uploader`] on top of `reqwest::blocking`. Do not call
//! these from inside an async runtime; reqwest panics if a blocking client
//! is driven from a runtime thread.

use crate::error::UploadError;
use crate::form::UploadForm;
use crate::types::{Retention, Service};
use crate::uploader::{default_user_agent, Endpoints};
use reqwest::StatusCode;
use std::time::Duration;

/// Blocking client for Catbox and Litterbox uploads
#[derive(Debug, Clone)]
pub struct Uploader {
    endpoints: Endpoints,
    user_agent: String,
}

impl Uploader {
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub(crate) fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Upload a file to Catbox and return its URL
    #[tracing::instrument(
        level = "debug",
        skip(self, content, account_token),
        fields(bytes = content.len(), with_token = account_token.is_some())
    )]
    pub fn upload_file(
        &self,
        content: &[u8],
        file_name: &str,
        timeout: Duration,
        account_token: Option<&str>,
    ) -> Result<String, UploadError> {
        let form = UploadForm::catbox(content, file_name, account_token);
        self.send(Service::Catbox, form, timeout)
    }

    /// Upload a file to Litterbox and return its URL
    #[tracing::instrument(level = "debug", skip(self, content), fields(bytes = content.len()))]
    pub fn upload_to_litterbox(
        &self,
        content: &[u8],
        file_name: &str,
        retention: &Retention,
        timeout: Duration,
    ) -> Result<String, UploadError> {
        let form = UploadForm::litterbox(content, file_name, retention);
        self.send(Service::Litterbox, form, timeout)
    }

    fn send(
        &self,
        service: Service,
        form: UploadForm,
        timeout: Duration,
    ) -> Result<String, UploadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(UploadError::Construction)?;

        let request = client
            .post(self.endpoints.url(service))
            .multipart(form.into_blocking_multipart()?)
            .build()
            .map_err(UploadError::Construction)?;

        tracing::debug!(%service, url = %request.url(), "Sending upload request");

        let response = client.execute(request).map_err(|e| {
            let err = UploadError::from_send(service, timeout, e);
            tracing::warn!(%service, error = %err, "Upload request failed");
            err
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            tracing::warn!(%service, %status, "Upload rejected");
            return Err(UploadError::Remote { status, body });
        }

        let url = response
            .text()
            .map_err(|e| UploadError::from_body(service, timeout, e))?;

        tracing::debug!(%service, %url, "Upload complete");
        Ok(url)
    }
}

impl Default for Uploader {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking upload to Catbox using the public endpoint
pub fn upload_file(
    content: &[u8],
    file_name: &str,
    timeout: Duration,
    account_token: Option<&str>,
) -> Result<String, UploadError> {
    Uploader::new().upload_file(content, file_name, timeout, account_token)
}

/// Blocking upload to Litterbox using the public endpoint
pub fn upload_to_litterbox(
    content: &[u8],
    file_name: &str,
    retention: &Retention,
    timeout: Duration,
) -> Result<String, UploadError> {
    Uploader::new().upload_to_litterbox(content, file_name, retention, timeout)
}
