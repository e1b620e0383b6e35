//! Form capture and submission.
//!
//! Each form on the site (appointment booking, admission application, contact
//! message, login, signup) keeps a map from field name to current value. The
//! only validation is presence of the fields marked required. A submit hands
//! the captured values to a `SubmissionGateway`; the contact form clears itself
//! afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::info;

// ==================== Form Definitions ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Appointment,
    Admission,
    Contact,
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    Select,
    Textarea,
    Password,
    Checkbox,
    File,
}

/// One declared field of a form.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub input: InputKind,
    pub required: bool,
    /// Never written to logs
    #[serde(skip)]
    pub sensitive: bool,
}

const fn field(name: &'static str, input: InputKind, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        input,
        required,
        sensitive: matches!(input, InputKind::Password),
    }
}

const APPOINTMENT_FIELDS: &[FieldSpec] = &[
    field("studentName", InputKind::Text, true),
    field("parentContact", InputKind::Tel, true),
    field("class", InputKind::Select, false),
    field("preferredDate", InputKind::Date, true),
    field("preferredTime", InputKind::Time, false),
    field("message", InputKind::Textarea, false),
];

const ADMISSION_FIELDS: &[FieldSpec] = &[
    field("grade", InputKind::Select, false),
    field("name", InputKind::Text, true),
    field("email", InputKind::Email, true),
    field("phone", InputKind::Tel, true),
    field("address", InputKind::Textarea, true),
    field("photo", InputKind::File, false),
    field("birthCertificate", InputKind::File, false),
    field("fatherNid", InputKind::File, false),
    field("motherNid", InputKind::File, false),
    field("bkashTransactionId", InputKind::Text, true),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", InputKind::Text, true),
    field("email", InputKind::Email, true),
    field("message", InputKind::Textarea, true),
];

const LOGIN_FIELDS: &[FieldSpec] = &[
    field("email", InputKind::Email, true),
    field("password", InputKind::Password, true),
];

const SIGNUP_FIELDS: &[FieldSpec] = &[
    field("name", InputKind::Text, true),
    field("email", InputKind::Email, true),
    field("password", InputKind::Password, true),
    field("confirmPassword", InputKind::Password, true),
    field("acceptTerms", InputKind::Checkbox, true),
];

impl FormKind {
    pub const ALL: [FormKind; 5] = [
        FormKind::Appointment,
        FormKind::Admission,
        FormKind::Contact,
        FormKind::Login,
        FormKind::Signup,
    ];

    pub fn from_name(name: &str) -> Option<FormKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormKind::Appointment => "appointment",
            FormKind::Admission => "admission",
            FormKind::Contact => "contact",
            FormKind::Login => "login",
            FormKind::Signup => "signup",
        }
    }

    /// Declared fields, in display order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Appointment => APPOINTMENT_FIELDS,
            FormKind::Admission => ADMISSION_FIELDS,
            FormKind::Contact => CONTACT_FIELDS,
            FormKind::Login => LOGIN_FIELDS,
            FormKind::Signup => SIGNUP_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|spec| spec.name == name)
    }

    /// Only the contact form clears itself after a successful submit.
    pub fn resets_after_submit(&self) -> bool {
        matches!(self, FormKind::Contact)
    }

    /// Serializable description of the form for page payloads.
    pub fn descriptor(&self) -> FormDescriptor {
        FormDescriptor {
            kind: *self,
            action: format!("/forms/{}", self.name()),
            fields: self.fields(),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormDescriptor {
    pub kind: FormKind,
    pub action: String,
    pub fields: &'static [FieldSpec],
}

// ==================== Captured Values ====================

/// Metadata of a selected file. File contents never reach the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub file_name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    File(Option<FileRef>),
}

impl FieldValue {
    fn empty_for(spec: &FieldSpec) -> Self {
        match spec.input {
            InputKind::File => FieldValue::File(None),
            InputKind::Checkbox => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.trim().is_empty(),
            // An unticked box does not satisfy a required checkbox
            FieldValue::Flag(checked) => *checked,
            FieldValue::File(file) => file.is_some(),
        }
    }

    fn fits(&self, spec: &FieldSpec) -> bool {
        match self {
            FieldValue::File(_) => spec.input == InputKind::File,
            FieldValue::Flag(_) => spec.input == InputKind::Checkbox,
            FieldValue::Text(_) => !matches!(spec.input, InputKind::File | InputKind::Checkbox),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("form '{form}' has no field '{field}'")]
    UnknownField { form: FormKind, field: String },

    #[error("field '{field}' has the wrong kind of value")]
    WrongValueKind { field: String },

    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Current state of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCapture {
    kind: FormKind,
    values: Vec<FieldValue>,
}

impl FormCapture {
    /// A form with every field empty.
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind.fields().iter().map(FieldValue::empty_for).collect(),
        }
    }

    /// Capture a form from a JSON object of field name to value.
    pub fn from_json(kind: FormKind, fields: &Map<String, Value>) -> Result<Self, FormError> {
        let mut capture = Self::new(kind);
        for (name, value) in fields {
            let value: FieldValue = serde_json::from_value(value.clone())
                .map_err(|_| FormError::WrongValueKind { field: name.clone() })?;
            capture.set_field(name, value)?;
        }
        Ok(capture)
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Update one field, as a keystroke or file selection would.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), FormError> {
        let index = self
            .kind
            .fields()
            .iter()
            .position(|spec| spec.name == name)
            .ok_or_else(|| FormError::UnknownField {
                form: self.kind,
                field: name.to_string(),
            })?;

        if !value.fits(&self.kind.fields()[index]) {
            return Err(FormError::WrongValueKind {
                field: name.to_string(),
            });
        }

        self.values[index] = value;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.kind
            .fields()
            .iter()
            .position(|spec| spec.name == name)
            .map(|index| &self.values[index])
    }

    /// Names of required fields that are still empty, in display order.
    pub fn missing_required(&self) -> Vec<String> {
        self.entries()
            .filter(|(spec, value)| spec.required && !value.is_present())
            .map(|(spec, _)| spec.name.to_string())
            .collect()
    }

    /// Clear every field back to empty.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    /// Validate presence and hand the captured values to `gateway`.
    pub fn submit(&mut self, gateway: &dyn SubmissionGateway) -> Result<SubmissionReceipt, FormError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        let submission = FormSubmission {
            kind: self.kind,
            fields: self
                .entries()
                .map(|(spec, value)| (spec, value.clone()))
                .collect(),
            submitted_at: Utc::now(),
        };
        let receipt = gateway.submit(&submission)?;

        if self.kind.resets_after_submit() {
            self.reset();
        }
        Ok(receipt)
    }

    fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> {
        self.kind.fields().iter().zip(self.values.iter())
    }
}

// ==================== Submission Gateway ====================

/// Captured values of a submitted form.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub kind: FormKind,
    pub fields: Vec<(&'static FieldSpec, FieldValue)>,
    pub submitted_at: DateTime<Utc>,
}

impl FormSubmission {
    /// The captured mapping with sensitive values masked, safe to log.
    pub fn redacted(&self) -> Value {
        let mut map = Map::new();
        for (spec, value) in &self.fields {
            let value = if spec.sensitive && value.is_present() {
                Value::String("[redacted]".to_string())
            } else {
                serde_json::to_value(value).unwrap_or(Value::Null)
            };
            map.insert(spec.name.to_string(), value);
        }
        Value::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: String,
    pub form: FormKind,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Destination of submitted forms.
pub trait SubmissionGateway: Send + Sync {
    fn submit(&self, submission: &FormSubmission) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Gateway that only records submissions in the log.
///
/// Nothing is persisted or forwarded; the receipt acknowledges that the
/// values were captured.
#[derive(Debug, Default)]
pub struct LoggingGateway {
    sequence: AtomicU64,
}

impl LoggingGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionGateway for LoggingGateway {
    fn submit(&self, submission: &FormSubmission) -> Result<SubmissionReceipt, SubmissionError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let reference = format!("{}-{:06}", submission.kind, sequence);

        info!(
            "Received {} form ({}): {}",
            submission.kind,
            reference,
            submission.redacted()
        );

        Ok(SubmissionReceipt {
            reference,
            form: submission.kind,
            received_at: submission.submitted_at,
        })
    }
}
