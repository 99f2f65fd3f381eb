use crate::error::UploadError;
use crate::form::UploadForm;
use crate::types::{Retention, Service};
use reqwest::StatusCode;
use std::time::Duration;

const CATBOX_API_URL: &str = "https://catbox.moe/user/api.php";
const LITTERBOX_API_URL: &str = "https://litterbox.catbox.moe/resources/internals/api.php";

/// Upload endpoints of the two hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub(crate) catbox: String,
    pub(crate) litterbox: String,
}

impl Endpoints {
    pub fn catbox(&self) -> &str {
        &self.catbox
    }

    pub fn litterbox(&self) -> &str {
        &self.litterbox
    }

    pub(crate) fn url(&self, service: Service) -> &str {
        match service {
            Service::Catbox => &self.catbox,
            Service::Litterbox => &self.litterbox,
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catbox: CATBOX_API_URL.to_string(),
            litterbox: LITTERBOX_API_URL.to_string(),
        }
    }
}

pub(crate) fn default_user_agent() -> String {
    format!("catbox-uploader/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for Catbox and Litterbox uploads.
///
/// Holds no per-request state: every call builds its own form and its own
/// HTTP client configured with that call's timeout, so one `Uploader` can be
/// shared freely between tasks.
#[derive(Debug, Clone)]
pub struct Uploader {
    endpoints: Endpoints,
    user_agent: String,
}

impl Uploader {
    /// Create an uploader for the public endpoints
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub(crate) fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            user_agent: default_user_agent(),
        }
    }

    /// Replace the `User-Agent` sent with each upload
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Upload a file to Catbox and return its URL.
    ///
    /// `account_token` is the Catbox user hash. `None` uploads anonymously;
    /// `Some` is always sent, even when empty.
    #[tracing::instrument(
        level = "debug",
        skip(self, content, account_token),
        fields(bytes = content.len(), with_token = account_token.is_some())
    )]
    pub async fn upload_file(
        &self,
        content: &[u8],
        file_name: &str,
        timeout: Duration,
        account_token: Option<&str>,
    ) -> Result<String, UploadError> {
        let form = UploadForm::catbox(content, file_name, account_token);
        self.send(Service::Catbox, form, timeout).await
    }

    /// Upload a file to Litterbox, kept for `retention`, and return its URL.
    ///
    /// The retention code is not checked locally; Litterbox rejects codes it
    /// does not know and that comes back as [`UploadError::Remote`].
    #[tracing::instrument(level = "debug", skip(self, content), fields(bytes = content.len()))]
    pub async fn upload_to_litterbox(
        &self,
        content: &[u8],
        file_name: &str,
        retention: &Retention,
        timeout: Duration,
    ) -> Result<String, UploadError> {
        let form = UploadForm::litterbox(content, file_name, retention);
        self.send(Service::Litterbox, form, timeout).await
    }

    async fn send(
        &self,
        service: Service,
        form: UploadForm,
        timeout: Duration,
    ) -> Result<String, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(UploadError::Construction)?;

        let request = client
            .post(self.endpoints.url(service))
            .multipart(form.into_multipart()?)
            .build()
            .map_err(UploadError::Construction)?;

        tracing::debug!(%service, url = %request.url(), "Sending upload request");

        let response = client.execute(request).await.map_err(|e| {
            let err = UploadError::from_send(service, timeout, e);
            tracing::warn!(%service, error = %err, "Upload request failed");
            err
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%service, %status, "Upload rejected");
            return Err(UploadError::Remote { status, body });
        }

        let url = response
            .text()
            .await
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

/// Upload a file to Catbox using the public endpoint.
///
/// Shorthand for [`Uploader::upload_file`] on a default uploader.
pub async fn upload_file(
    content: &[u8],
    file_name: &str,
    timeout: Duration,
    account_token: Option<&str>,
) -> Result<String, UploadError> {
    Uploader::new()
        .upload_file(content, file_name, timeout, account_token)
        .await
}

/// Upload a file to Litterbox using the public endpoint.
pub async fn upload_to_litterbox(
    content: &[u8],
    file_name: &str,
    retention: &Retention,
    timeout: Duration,
) -> Result<String, UploadError> {
    Uploader::new()
        .upload_to_litterbox(content, file_name, retention, timeout)
        .await
}
