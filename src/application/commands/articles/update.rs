use super::{
    ArticleCommandService,
    service::{validate, vanished},
};
use crate::{
    application::{dto::SaveOutcome, error::ApplicationResult},
    domain::article::ArticleUpdate,
};

/// Only the fields that were submitted are applied; `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub text: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<SaveOutcome> {
        let mut article = self.find_existing(command.id).await?;

        let title = command
            .title
            .unwrap_or_else(|| article.title.as_str().to_owned());
        let text = command
            .text
            .unwrap_or_else(|| article.text.as_str().to_owned());

        let attributes = match validate(Some(command.id), title, text)? {
            Ok(attributes) => attributes,
            Err(rejected) => return Ok(SaveOutcome::Invalid(rejected)),
        };

        if !article.differs_from(&attributes) {
            tracing::debug!(article_id = %article.id, "article unchanged, skipping write");
            return Ok(SaveOutcome::Saved(article.into()));
        }

        article.set_content(attributes, self.clock.now());
        let updated = self
            .write_repo
            .update(ArticleUpdate::from(&article))
            .await
            .map_err(vanished)?;

        tracing::info!(article_id = %updated.id, "article updated");
        Ok(SaveOutcome::Saved(updated.into()))
    }
}
