use crate::models::field::Field;
use std::collections::HashMap;

/// Raw field values submitted for one step, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: HashMap<String, String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builder-style insert; `None` leaves the field absent.
    pub fn with(mut self, field: Field, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.fields.insert(field.key().to_string(), v.to_string());
        }
        self
    }

    /// Raw value of a field; absent fields read as an empty string.
    pub fn raw(&self, field: Field) -> &str {
        self.fields.get(field.key()).map(String::as_str).unwrap_or("")
    }

    /// Raw value with surrounding whitespace removed.
    pub fn trimmed(&self, field: Field) -> &str {
        self.raw(field).trim()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
