// src/domain/article/validation.rs
use std::fmt;

/// A single failed rule on one attribute, e.g. `title` / `can't be blank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Human readable message prefixed with the capitalised attribute name.
    pub fn full_message(&self) -> String {
        let mut chars = self.field.chars();
        let label: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{} {}", label.replace('_', " "), self.message)
    }
}

/// Errors collected while validating a record, in the order the rules ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::full_message).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_message_capitalises_field() {
        let error = FieldError::new("title", "can't be blank");
        assert_eq!(error.full_message(), "Title can't be blank");
    }

    #[test]
    fn display_joins_messages_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "can't be blank");
        errors.add("title", "is too short (minimum is 5 characters)");
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Title can't be blank, Title is too short (minimum is 5 characters)"
        );
    }
}
