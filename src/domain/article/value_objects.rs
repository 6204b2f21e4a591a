use crate::domain::article::validation::ValidationErrors;
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const TITLE_MIN_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let errors = Self::check(&value);
        if !errors.is_empty() {
            return Err(DomainError::Invalid(errors));
        }
        Ok(Self(value))
    }

    /// Runs every title rule and reports all failures.
    pub fn check(value: &str) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if value.trim().is_empty() {
            errors.add("title", "can't be blank");
        }
        if value.chars().count() < TITLE_MIN_CHARS {
            errors.add(
                "title",
                format!("is too short (minimum is {TITLE_MIN_CHARS} characters)"),
            );
        }
        errors
    }

    /// Rehydrates a title already accepted by the store.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

/// Free-form article text; empty is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleText(String);

impl ArticleText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleText> for String {
    fn from(value: ArticleText) -> Self {
        value.0
    }
}
