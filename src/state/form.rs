//! Required-field validation for dialog forms.

use thiserror::Error;

/// Error shown on a blank required field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One labelled text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    label: String,
    value: String,
    required: bool,
    error: Option<String>,
}

impl FormField {
    /// Field that must not be blank.
    pub fn required(label: impl Into<String>) -> Self {
        Self::new(label, true)
    }

    /// Field that may be left blank.
    pub fn optional(label: impl Into<String>) -> Self {
        Self::new(label, false)
    }

    fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            required,
            error: None,
        }
    }

    /// Prefill the field.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Label shown beside the field.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current text of the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Editable text of the field.
    pub fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }

    /// Whether a blank value fails validation.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Message set by the last validation, if the field failed it.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Flag the field with `message` until the next validation.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

/// Required fields left blank, by label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Labels of the blank fields.
    pub missing: Vec<String>,
}

/// Fields of a dialog, validated together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    /// Form over `fields`, in display order.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Field at `index` for editing.
    pub fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    /// Mark blank required fields and clear the errors of the rest.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        for field in &mut self.fields {
            if field.is_missing() {
                field.error = Some(REQUIRED_MESSAGE.to_string());
                missing.push(field.label.clone());
            } else {
                field.error = None;
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}
