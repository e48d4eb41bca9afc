//! Raw form submissions
//!
//! `application/x-www-form-urlencoded` bodies are kept as ordered pairs so a
//! key repeated by a multi-select survives intact.

use super::ValidationError;

/// Submitted form fields in body order
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for `key`, untrimmed.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted for `key`, in order.
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Required, non-blank text field, trimmed.
    pub fn required_text(&self, key: &'static str) -> Result<String, ValidationError> {
        let value = self
            .first(key)
            .ok_or(ValidationError::Missing { field: key })?
            .trim();

        if value.is_empty() {
            return Err(ValidationError::Empty { field: key });
        }

        Ok(value.to_owned())
    }

    /// Optional text field; absent or blank becomes `None`.
    pub fn optional_text(&self, key: &str) -> Option<String> {
        self.first(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
    }

    /// Checkbox-style flag. Unchecked boxes are simply not submitted.
    pub fn flag(&self, key: &str) -> bool {
        self.first(key).is_some_and(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "y" | "yes" | "on" | "true" | "1"
            )
        })
    }

    /// Required positive integer id (a foreign key reference).
    pub fn required_id(&self, key: &'static str) -> Result<i32, ValidationError> {
        let raw = self.required_text(key)?;
        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(ValidationError::InvalidFormat {
                field: key,
                reason: "must be a positive integer",
            }),
        }
    }
}

#[cfg(test)]
pub(crate) fn fields(pairs: &[(&str, &str)]) -> FormFields {
    FormFields::new(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    )
}
