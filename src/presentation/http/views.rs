// src/presentation/http/views.rs
use crate::application::dto::{ArticleDto, RejectedArticle};
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub fn render<T: Template>(status: StatusCode, view: &T) -> Response {
    match view.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, "500 internal server error").into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "articles/index.html")]
pub struct IndexPage {
    pub articles: Vec<ArticleDto>,
}

#[derive(Template)]
#[template(path = "articles/show.html")]
pub struct ShowPage {
    pub article: ArticleDto,
}

#[derive(Template)]
#[template(path = "articles/new.html")]
pub struct NewPage {
    pub form: ArticleForm,
}

#[derive(Template)]
#[template(path = "articles/edit.html")]
pub struct EditPage {
    pub id: i64,
    pub form: ArticleForm,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

/// Values and errors shown by the shared article form partial.
#[derive(Debug, Clone, Default)]
pub struct ArticleForm {
    pub action: String,
    /// Hidden `_method` value; empty for plain POST.
    pub method: String,
    pub title: String,
    pub text: String,
    pub errors: Vec<String>,
    pub submit_label: String,
}

impl ArticleForm {
    pub fn blank() -> Self {
        Self {
            action: "/articles".into(),
            submit_label: "Create Article".into(),
            ..Self::default()
        }
    }

    pub fn for_article(article: &ArticleDto) -> Self {
        Self {
            action: format!("/articles/{}", article.id),
            method: "patch".into(),
            title: article.title.clone(),
            text: article.text.clone(),
            errors: Vec::new(),
            submit_label: "Update Article".into(),
        }
    }

    pub fn rejected(rejected: RejectedArticle) -> Self {
        let base = match rejected.id {
            Some(id) => Self {
                action: format!("/articles/{id}"),
                method: "patch".into(),
                submit_label: "Update Article".into(),
                ..Self::default()
            },
            None => Self::blank(),
        };
        Self {
            title: rejected.title,
            text: rejected.text,
            errors: rejected.errors,
            ..base
        }
    }

    pub fn error_summary(&self) -> String {
        let noun = if self.errors.len() == 1 { "error" } else { "errors" };
        format!(
            "{} {noun} prohibited this article from being saved:",
            self.errors.len()
        )
    }
}
