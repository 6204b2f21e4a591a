// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::RejectedArticle,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleAttributes, ArticleId, ArticleReadRepository, ArticleWriteRepository},
        errors::DomainError,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) async fn find_existing(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}

/// Validates submitted values, turning rule failures into a `RejectedArticle`.
pub(super) fn validate(
    id: Option<i64>,
    title: String,
    text: String,
) -> ApplicationResult<Result<ArticleAttributes, RejectedArticle>> {
    match ArticleAttributes::new(title.as_str(), text.as_str()) {
        Ok(attributes) => Ok(Ok(attributes)),
        Err(DomainError::Invalid(errors)) => Ok(Err(RejectedArticle {
            id,
            title,
            text,
            errors: errors.full_messages(),
        })),
        Err(other) => Err(other.into()),
    }
}

/// Store-side `NotFound` after a successful lookup means a concurrent delete.
pub(super) fn vanished(err: DomainError) -> ApplicationError {
    match err {
        DomainError::NotFound(_) => ApplicationError::not_found("article not found"),
        other => other.into(),
    }
}
