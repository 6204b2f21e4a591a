use crate::domain::article::Article;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            text: article.text.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Submitted values that failed validation, kept so the form can be shown again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedArticle {
    pub id: Option<i64>,
    pub title: String,
    pub text: String,
    pub errors: Vec<String>,
}

/// Result of a create or update: either persisted or rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(ArticleDto),
    Invalid(RejectedArticle),
}
