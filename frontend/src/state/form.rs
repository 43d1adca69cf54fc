//! Declarative form schemas and the immutable form state driven by them.
//!
//! A [`FormState`] only changes through [`FormState::reduce`],
//! [`FormState::begin_submit`] and [`FormState::settle`]; each consumes the
//! previous state and returns the next one.

use crate::api::{ApiError, FileUpload, PayloadValue, SubmissionPayload};
use leptos::*;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number(NumberKind),
    /// Options are loaded at runtime; the value is the chosen option id.
    Select {
        placeholder: &'static str,
    },
    File {
        accept: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub required_message: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            required_message: "",
        }
    }

    pub const fn required(self, message: &'static str) -> Self {
        Self {
            required: true,
            required_message: message,
            ..self
        }
    }

    pub fn required_error(&self) -> String {
        if self.required_message.is_empty() {
            format!("{} is required", self.label)
        } else {
            self.required_message.to_string()
        }
    }

    pub fn invalid_number_error(&self) -> String {
        format!("{} must be a number", self.label)
    }

    pub fn still_loading_error(&self) -> String {
        format!("{} is still loading", self.label)
    }

    fn coerce(&self, raw: &str) -> Result<PayloadValue, String> {
        let trimmed = raw.trim();
        match self.kind {
            InputKind::Text => Ok(PayloadValue::Text(raw.to_string())),
            InputKind::Number(NumberKind::Float) => trimmed
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(PayloadValue::Float)
                .ok_or_else(|| self.invalid_number_error()),
            InputKind::Number(NumberKind::Integer) | InputKind::Select { .. } => trimmed
                .parse::<i64>()
                .map(PayloadValue::Integer)
                .map_err(|_| self.invalid_number_error()),
            InputKind::File { .. } => Err(format!("{} expects a file", self.label)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    fields: &'static [FieldSpec],
}

impl FormSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Splits raw server messages into entries naming a field of this schema
    /// and entries that do not. Entries without any message are dropped.
    pub fn tag_errors(&self, raw: BTreeMap<String, Vec<String>>) -> ServerErrors {
        let mut tagged = ServerErrors::default();
        for (field, mut messages) in raw {
            messages.retain(|message| !message.trim().is_empty());
            if messages.is_empty() {
                log::warn!("server sent no message for `{}`", field);
                continue;
            }
            let error = FieldError { field, messages };
            if self.field(&error.field).is_some() {
                tagged.fields.push(error);
            } else {
                tagged.unknown.push(error);
            }
        }
        tagged
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

impl FieldError {
    pub fn message(&self) -> String {
        self.messages.join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerErrors {
    pub fields: Vec<FieldError>,
    pub unknown: Vec<FieldError>,
}

impl ServerErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.unknown.is_empty()
    }
}

/// Identifies one background read of a file input. Only the newest read of
/// a field may land; a reset or a later selection makes older ones stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadToken(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit {
        field: &'static str,
        value: String,
    },
    AttachFile {
        field: &'static str,
        file: Option<FileUpload>,
    },
    FinishRead {
        field: &'static str,
        token: ReadToken,
        result: Result<FileUpload, String>,
    },
    Validate,
    SetServerErrors(ServerErrors),
    Fail(String),
    Reset,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitDecision {
    AlreadySubmitting,
    Invalid,
    Ready(SubmissionPayload),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Rejected,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    schema: &'static FormSchema,
    values: BTreeMap<&'static str, String>,
    files: BTreeMap<&'static str, FileUpload>,
    pending_reads: BTreeMap<&'static str, ReadToken>,
    last_token: u64,
    errors: BTreeMap<&'static str, String>,
    form_error: Option<String>,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
            files: BTreeMap::new(),
            pending_reads: BTreeMap::new(),
            last_token: 0,
            errors: BTreeMap::new(),
            form_error: None,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn file(&self, field: &str) -> Option<&FileUpload> {
        self.files.get(field)
    }

    pub fn is_reading(&self, field: &str) -> bool {
        self.pending_reads.contains_key(field)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_pristine(&self) -> bool {
        self.values.is_empty()
            && self.files.is_empty()
            && self.pending_reads.is_empty()
            && self.errors.is_empty()
            && self.form_error.is_none()
    }

    pub fn reduce(mut self, action: FormAction) -> Self {
        match action {
            FormAction::Edit { field, value } => {
                let Some(spec) = self.schema.field(field) else {
                    log::warn!("ignoring edit of unknown field `{}`", field);
                    return self;
                };
                self.values.insert(spec.name, value);
                self.errors.remove(spec.name);
            }
            FormAction::AttachFile { field, file } => {
                let Some(spec) = self.schema.field(field) else {
                    log::warn!("ignoring file for unknown field `{}`", field);
                    return self;
                };
                self.pending_reads.remove(spec.name);
                match file {
                    Some(file) => self.files.insert(spec.name, file),
                    None => self.files.remove(spec.name),
                };
                self.errors.remove(spec.name);
            }
            FormAction::FinishRead {
                field,
                token,
                result,
            } => {
                if self.pending_reads.get(field) != Some(&token) {
                    log::debug!("dropping stale read of `{}`", field);
                    return self;
                }
                self.pending_reads.remove(field);
                self.errors.remove(field);
                match result {
                    Ok(file) => {
                        self.files.insert(field, file);
                    }
                    Err(message) => {
                        self.files.remove(field);
                        self.form_error = Some(message);
                    }
                }
            }
            FormAction::Validate => {
                self.errors = self.build_payload().err().unwrap_or_default();
            }
            FormAction::SetServerErrors(server) => {
                self.status = SubmissionStatus::Idle;
                for error in &server.fields {
                    if let Some(spec) = self.schema.field(&error.field) {
                        log::debug!("Field: {}, Errors: {}", spec.name, error.message());
                        self.errors.insert(spec.name, error.message());
                    }
                }
                if !server.unknown.is_empty() {
                    let summary = server
                        .unknown
                        .iter()
                        .map(|error| format!("{}: {}", error.field, error.message()))
                        .collect::<Vec<_>>()
                        .join("; ");
                    log::warn!("server reported errors for unknown fields: {}", summary);
                    self.form_error = Some(summary);
                }
            }
            FormAction::Fail(message) => {
                self.status = SubmissionStatus::Idle;
                self.form_error = Some(message);
            }
            FormAction::Reset => {
                let mut fresh = FormState::new(self.schema);
                fresh.last_token = self.last_token;
                return fresh;
            }
        }
        self
    }

    /// Marks a background read of `field` as pending and returns its token.
    /// The previously chosen file is dropped until the read lands.
    pub fn begin_read(mut self, field: &str) -> (Self, Option<ReadToken>) {
        let Some(spec) = self.schema.field(field) else {
            log::warn!("ignoring read for unknown field `{}`", field);
            return (self, None);
        };
        self.last_token += 1;
        let token = ReadToken(self.last_token);
        self.pending_reads.insert(spec.name, token);
        self.files.remove(spec.name);
        self.errors.remove(spec.name);
        (self, Some(token))
    }

    /// Runs client validation and, when it passes, moves to `Submitting` and
    /// hands back the payload. A state that is already submitting is returned
    /// untouched.
    pub fn begin_submit(mut self) -> (Self, SubmitDecision) {
        if self.is_submitting() {
            return (self, SubmitDecision::AlreadySubmitting);
        }
        self.form_error = None;
        match self.build_payload() {
            Ok(payload) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                (self, SubmitDecision::Ready(payload))
            }
            Err(errors) => {
                self.errors = errors;
                (self, SubmitDecision::Invalid)
            }
        }
    }

    /// Folds the server's answer back into the form.
    pub fn settle(self, result: Result<Value, ApiError>) -> (Self, SubmitOutcome) {
        match result {
            Ok(_) => (self.reduce(FormAction::Reset), SubmitOutcome::Created),
            Err(err) => match err
                .field_errors()
                .map(|raw| self.schema.tag_errors(raw))
                .filter(|tagged| !tagged.is_empty())
            {
                Some(tagged) => {
                    log::error!("Validation errors: {}", err);
                    (
                        self.reduce(FormAction::SetServerErrors(tagged)),
                        SubmitOutcome::Rejected,
                    )
                }
                None => {
                    log::error!("Request failed: {} ({})", err, err.code);
                    let message = format!("Submission failed: {}", err.error);
                    (self.reduce(FormAction::Fail(message)), SubmitOutcome::Failed)
                }
            },
        }
    }

    fn build_payload(&self) -> Result<SubmissionPayload, BTreeMap<&'static str, String>> {
        let mut payload = SubmissionPayload::default();
        let mut errors = BTreeMap::new();
        for spec in self.schema.fields() {
            if let InputKind::File { .. } = spec.kind {
                if self.is_reading(spec.name) {
                    errors.insert(spec.name, spec.still_loading_error());
                    continue;
                }
                match self.files.get(spec.name) {
                    Some(file) => payload.file = Some((spec.name.to_string(), file.clone())),
                    None if spec.required => {
                        errors.insert(spec.name, spec.required_error());
                    }
                    None => {}
                }
                continue;
            }

            let raw = self.value(spec.name);
            if raw.trim().is_empty() {
                if spec.required {
                    errors.insert(spec.name, spec.required_error());
                }
                continue;
            }
            match spec.coerce(raw) {
                Ok(value) => payload.fields.push((spec.name.to_string(), value)),
                Err(message) => {
                    errors.insert(spec.name, message);
                }
            }
        }
        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }
}

/// Replaces the form held in `form` with the state returned by `step`,
/// passing `step`'s second output through. `None` once the signal is
/// disposed.
pub fn transition<O>(
    form: RwSignal<FormState>,
    step: impl FnOnce(FormState) -> (FormState, O),
) -> Option<O> {
    form.try_update(|state| {
        let schema = state.schema;
        let current = std::mem::replace(state, FormState::new(schema));
        let (next, output) = step(current);
        *state = next;
        output
    })
}

/// Applies `action` to the form held in `form`.
pub fn dispatch(form: RwSignal<FormState>, action: FormAction) {
    transition(form, |state| (state.reduce(action), ()));
}
