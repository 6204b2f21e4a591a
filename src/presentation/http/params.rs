// src/presentation/http/params.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    error::{ApplicationError, ApplicationResult},
};

/// Form key carrying the intended verb for browsers that can only POST.
pub const METHOD_OVERRIDE_KEY: &str = "_method";

const ARTICLE_ROOT: &str = "article";

/// Article fields accepted from a submitted form. Everything else is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleParams {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl ArticleParams {
    /// Requires at least one `article[...]` key and keeps only `title` and `text`.
    /// Later duplicates win.
    pub fn permit(pairs: &[(String, String)]) -> ApplicationResult<Self> {
        let mut present = false;
        let mut params = Self::default();

        for (key, value) in pairs {
            let Some(field) = nested_field(key, ARTICLE_ROOT) else {
                continue;
            };
            present = true;
            match field {
                "title" => params.title = Some(value.clone()),
                "text" => params.text = Some(value.clone()),
                other => tracing::debug!(parameter = other, "unpermitted parameter dropped"),
            }
        }

        if !present {
            return Err(ApplicationError::validation(format!(
                "param is missing or the value is empty: {ARTICLE_ROOT}"
            )));
        }
        Ok(params)
    }

    pub fn into_create_command(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            text: self.text,
        }
    }

    pub fn into_update_command(self, id: i64) -> UpdateArticleCommand {
        UpdateArticleCommand {
            id,
            title: self.title,
            text: self.text,
        }
    }
}

/// Lowercased `_method` value, if the form carried one.
pub fn method_override(pairs: &[(String, String)]) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == METHOD_OVERRIDE_KEY)
        .map(|(_, value)| value.trim().to_ascii_lowercase())
}

fn nested_field<'a>(key: &'a str, root: &str) -> Option<&'a str> {
    key.strip_prefix(root)?.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn permits_only_title_and_text() {
        let params = ArticleParams::permit(&pairs(&[
            ("article[title]", "Hello Rails"),
            ("article[text]", "body"),
            ("article[id]", "99"),
            ("article[created_at]", "1999-01-01"),
            ("admin", "true"),
        ]))
        .unwrap();
        assert_eq!(
            params,
            ArticleParams {
                title: Some("Hello Rails".into()),
                text: Some("body".into()),
            }
        );
    }

    #[test]
    fn missing_article_root_is_rejected() {
        let err = ArticleParams::permit(&pairs(&[("title", "Hello Rails")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn unpermitted_only_root_yields_empty_params() {
        let params = ArticleParams::permit(&pairs(&[("article[author]", "mallory")])).unwrap();
        assert_eq!(params, ArticleParams::default());
    }

    #[test]
    fn absent_fields_stay_unset() {
        let command = ArticleParams::permit(&pairs(&[("article[text]", "only text")]))
            .unwrap()
            .into_update_command(3);
        assert_eq!(command.id, 3);
        assert!(command.title.is_none());
        assert_eq!(command.text.as_deref(), Some("only text"));
    }

    #[test]
    fn nested_field_requires_brackets() {
        assert_eq!(nested_field("article[title]", "article"), Some("title"));
        assert_eq!(nested_field("articles[title]", "article"), None);
        assert_eq!(nested_field("article[title", "article"), None);
    }

    #[test]
    fn method_override_is_case_insensitive() {
        let form = pairs(&[("_method", " DELETE ")]);
        assert_eq!(method_override(&form).as_deref(), Some("delete"));
        assert_eq!(method_override(&pairs(&[])), None);
    }
}
