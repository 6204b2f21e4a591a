// src/application/commands/articles/create.rs
use super::{ArticleCommandService, service::validate};
use crate::{
    application::{dto::SaveOutcome, error::ApplicationResult},
    domain::article::NewArticle,
};

/// Values taken from the permitted form parameters; absent fields stay `None`.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<SaveOutcome> {
        let title = command.title.unwrap_or_default();
        let text = command.text.unwrap_or_default();

        let attributes = match validate(None, title, text)? {
            Ok(attributes) => attributes,
            Err(rejected) => return Ok(SaveOutcome::Invalid(rejected)),
        };

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewArticle::new(attributes, now))
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(SaveOutcome::Saved(created.into()))
    }
}
