// src/application/commands/articles/delete.rs
use super::{ArticleCommandService, service::vanished};
use crate::application::error::ApplicationResult;

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let article = self.find_existing(command.id).await?;

        self.write_repo.delete(article.id).await.map_err(vanished)?;

        tracing::info!(article_id = %article.id, "article destroyed");
        Ok(())
    }
}
