pub mod articles;

pub use articles::{ArticleDto, RejectedArticle, SaveOutcome};
