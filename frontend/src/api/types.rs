use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// One entry of a reference list used to populate `<select>` inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Field-keyed messages carried in `details.errors`, if the server sent any.
    ///
    /// Each entry may be a single string or a list of strings; anything else
    /// makes the whole payload count as unstructured.
    pub fn field_errors(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let errors = self.details.as_ref()?.get("errors")?.clone();
        let parsed: BTreeMap<String, FieldMessages> = serde_json::from_value(errors).ok()?;
        Some(
            parsed
                .into_iter()
                .map(|(field, messages)| (field, messages.into_vec()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FieldMessages {
    One(String),
    Many(Vec<String>),
}

impl FieldMessages {
    fn into_vec(self) -> Vec<String> {
        match self {
            FieldMessages::One(message) => vec![message],
            FieldMessages::Many(messages) => messages,
        }
    }
}

/// A file chosen through a file input, read into memory for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for PayloadValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadValue::Text(value) => f.write_str(value),
            PayloadValue::Integer(value) => write!(f, "{}", value),
            PayloadValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// Wire-ready view over a form, built once at submit time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubmissionPayload {
    pub fields: Vec<(String, PayloadValue)>,
    pub file: Option<(String, FileUpload)>,
}

impl SubmissionPayload {
    pub fn get(&self, name: &str) -> Option<&PayloadValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}
