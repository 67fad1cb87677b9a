use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A phonebook entry as seen by clients. `id` is always the string form of
/// whatever the store uses internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<models::person::Model> for Person {
    fn from(m: models::person::Model) -> Self {
        Self { id: m.id.to_string(), name: m.name, number: m.number }
    }
}

/// Creation request body. Both fields are optional at the wire level;
/// presence is checked by [`PersonInput::validate`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self { name: Some(name.into()), number: Some(number.into()) }
    }

    /// Presence check only; an empty string counts as missing.
    pub fn validate(self) -> Validated {
        match (non_empty(self.name), non_empty(self.number)) {
            (Some(name), Some(number)) => Validated::Valid(NewPerson { name, number }),
            _ => Validated::Invalid(ValidationError::MissingField),
        }
    }
}

/// Update request body for `PUT /api/persons/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumberInput {
    #[serde(default)]
    pub number: Option<String>,
}

impl NumberInput {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: Some(number.into()) }
    }

    pub fn validate(self) -> Result<String, ValidationError> {
        non_empty(self.number).ok_or(ValidationError::MissingField)
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}

/// Fields of a person that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub number: String,
}

/// Outcome of validating a [`PersonInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    Valid(NewPerson),
    Invalid(ValidationError),
}

/// Live status snapshot for the `/info` page.
#[derive(Debug, Clone)]
pub struct Info {
    pub count: usize,
    pub at: DateTime<Local>,
}

impl Info {
    pub fn render_html(&self) -> String {
        format!(
            "<p>Phonebook has info for {} people</p>\n<p>{}</p>",
            self.count,
            self.at.to_rfc2822()
        )
    }
}
