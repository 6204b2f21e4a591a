// src/domain/article/entity.rs
use crate::domain::article::validation::ValidationErrors;
use crate::domain::article::value_objects::{ArticleId, ArticleText, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Whether saving `attributes` would change the stored content.
    pub fn differs_from(&self, attributes: &ArticleAttributes) -> bool {
        self.title != attributes.title || self.text != attributes.text
    }

    pub fn set_content(&mut self, attributes: ArticleAttributes, now: DateTime<Utc>) {
        self.title = attributes.title;
        self.text = attributes.text;
        self.updated_at = now;
    }
}

/// The user-editable part of an article, validated as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAttributes {
    pub title: ArticleTitle,
    pub text: ArticleText,
}

impl ArticleAttributes {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        let mut errors = ValidationErrors::new();
        errors.extend(ArticleTitle::check(&title));
        if !errors.is_empty() {
            return Err(DomainError::Invalid(errors));
        }

        Ok(Self {
            title: ArticleTitle::new(title)?,
            text: ArticleText::new(text),
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(attributes: ArticleAttributes, now: DateTime<Utc>) -> Self {
        Self {
            title: attributes.title,
            text: attributes.text,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub text: ArticleText,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            text: article.text.clone(),
            updated_at: article.updated_at,
        }
    }
}
