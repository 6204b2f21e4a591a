// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use mokkan_articles::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use mokkan_articles::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/* -------------------------------- InMemoryArticles -------------------------------- */

/// 読み書き両方を実装するインメモリ記事リポジトリ
#[derive(Default)]
pub struct InMemoryArticles {
    rows: Mutex<BTreeMap<i64, Article>>,
    next_id: Mutex<i64>,
}

impl InMemoryArticles {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next
        };
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            text: article.text,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.rows.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.title = update.title;
        row.text = update.text;
        row.updated_at = update.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }
}

/* -------------------------------- FailingArticleRepo -------------------------------- */

/// すべての操作が永続化エラーになるリポジトリ
pub struct FailingArticleRepo;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("database is locked".into()))
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        broken()
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        broken()
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        broken()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        broken()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        broken()
    }
}
