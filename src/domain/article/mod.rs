pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleAttributes, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use validation::ValidationErrors;
pub use value_objects::{ArticleId, ArticleText, ArticleTitle, TITLE_MIN_CHARS};
