// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand,
    dto::SaveOutcome,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ArticleIdParam;
use crate::presentation::http::params::{self, ArticleParams};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::views::{
    self, ArticleForm, EditPage, IndexPage, NewPage, ShowPage,
};
use axum::{
    Extension, Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

const ARTICLES_PATH: &str = "/articles";

fn article_path(id: i64) -> String {
    format!("{ARTICLES_PATH}/{id}")
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()?;

    Ok(views::render(StatusCode::OK, &IndexPage { articles }))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(views::render(StatusCode::OK, &ShowPage { article }))
}

/// Scanner clients are turned away by route middleware before reaching this.
pub async fn new_article() -> Response {
    views::render(
        StatusCode::OK,
        &NewPage {
            form: ArticleForm::blank(),
        },
    )
}

pub async fn create(
    Extension(state): Extension<HttpState>,
    Form(form): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    let command = ArticleParams::permit(&form).into_http()?.into_create_command();

    let outcome = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok(match outcome {
        SaveOutcome::Saved(article) => Redirect::to(&article_path(article.id)).into_response(),
        SaveOutcome::Invalid(rejected) => views::render(
            StatusCode::UNPROCESSABLE_ENTITY,
            &NewPage {
                form: ArticleForm::rejected(rejected),
            },
        ),
    })
}

pub async fn edit(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    Ok(views::render(
        StatusCode::OK,
        &EditPage {
            id,
            form: ArticleForm::for_article(&article),
        },
    ))
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    Form(form): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    apply_update(&state, id, &form).await
}

pub async fn destroy(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Response> {
    apply_destroy(&state, id).await
}

/// `POST /articles/{id}` from HTML forms, dispatched on the `_method` field.
pub async fn override_method(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    Form(form): Form<Vec<(String, String)>>,
) -> HttpResult<Response> {
    match params::method_override(&form).as_deref() {
        Some("patch" | "put") => apply_update(&state, id, &form).await,
        Some("delete") => apply_destroy(&state, id).await,
        Some(other) => Err(HttpError::method_not_allowed(other)),
        None => Err(HttpError::method_not_allowed("post")),
    }
}

async fn apply_update(
    state: &HttpState,
    id: i64,
    form: &[(String, String)],
) -> HttpResult<Response> {
    // Resolve the record before looking at the body so a missing id is a 404.
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    let command = ArticleParams::permit(form).into_http()?.into_update_command(id);

    let outcome = state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(match outcome {
        SaveOutcome::Saved(article) => Redirect::to(&article_path(article.id)).into_response(),
        SaveOutcome::Invalid(rejected) => views::render(
            StatusCode::UNPROCESSABLE_ENTITY,
            &EditPage {
                id,
                form: ArticleForm::rejected(rejected),
            },
        ),
    })
}

async fn apply_destroy(state: &HttpState, id: i64) -> HttpResult<Response> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Redirect::to(ARTICLES_PATH).into_response())
}
