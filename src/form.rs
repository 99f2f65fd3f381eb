//! Multipart form assembly shared by the async and blocking uploaders.
//!
//! The form is built as plain data first so both reqwest flavors get exactly
//! the same fields in the same order.

use crate::error::UploadError;
use crate::types::Retention;

/// Name of the file part both hosts expect
pub(crate) const FILE_FIELD: &str = "fileToUpload";

const FILE_MIME: &str = "application/octet-stream";

/// A fully buffered upload body
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UploadForm {
    content: Vec<u8>,
    file_name: String,
    fields: Vec<(&'static str, String)>,
}

impl UploadForm {
    fn new(content: &[u8], file_name: &str) -> Self {
        Self {
            content: content.to_vec(),
            file_name: file_name.to_string(),
            fields: vec![("reqtype", "fileupload".to_string())],
        }
    }

    /// Form for the permanent host. `userHash` is only sent when a token is given.
    pub(crate) fn catbox(content: &[u8], file_name: &str, account_token: Option<&str>) -> Self {
        let mut form = Self::new(content, file_name);
        if let Some(token) = account_token {
            form.fields.push(("userHash", token.to_string()));
        }
        form
    }

    /// Form for the temporary host
    pub(crate) fn litterbox(content: &[u8], file_name: &str, retention: &Retention) -> Self {
        let mut form = Self::new(content, file_name);
        form.fields.push(("time", retention.as_str().to_string()));
        form
    }

    #[cfg(test)]
    pub(crate) fn content(&self) -> &[u8] {
        &self.content
    }

    #[cfg(test)]
    pub(crate) fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Text fields in send order
    #[cfg(test)]
    pub(crate) fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    #[cfg(test)]
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn into_multipart(self) -> Result<reqwest::multipart::Form, UploadError> {
        let part = reqwest::multipart::Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(FILE_MIME)
            .map_err(UploadError::Construction)?;

        let form = reqwest::multipart::Form::new().part(FILE_FIELD, part);
        Ok(self
            .fields
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value)))
    }

    #[cfg(feature = "blocking")]
    pub(crate) fn into_blocking_multipart(
        self,
    ) -> Result<reqwest::blocking::multipart::Form, UploadError> {
        let part = reqwest::blocking::multipart::Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(FILE_MIME)
            .map_err(UploadError::Construction)?;

        let form = reqwest::blocking::multipart::Form::new().part(FILE_FIELD, part);
        Ok(self
            .fields
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value)))
    }
}
