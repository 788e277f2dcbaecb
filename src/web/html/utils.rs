use html_minifier::HTMLMinifier;
use tera::Context;
use thiserror::Error;
use tide::{http::mime, Response, StatusCode};
use tracing::error;

use crate::i18n::LanguageContext;
use crate::State;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("rendering error")]
    Tera(#[from] tera::Error),
}

pub(super) fn render(
    state: &State,
    template: &'static str,
    context: &Context,
) -> Result<String, TemplateError> {
    let rendered = state.tera.render(template, context)?;

    let mut html_minifier = HTMLMinifier::new();
    if let Err(err) = html_minifier.digest(&rendered) {
        error!("Failed to minify HTML: {}", err);
        return Ok(rendered);
    };

    let minified = match std::str::from_utf8(html_minifier.get_html()) {
        Ok(minified) => minified.to_string(),
        Err(err) => {
            error!("Failed to parse minified HTML as UTF-8: {}", err);
            rendered
        },
    };

    Ok(minified)
}

/// Context shared by every page: language, the translation table and the
/// cache buster.
pub(super) fn base_context(state: &State, language: &LanguageContext, title_key: &str) -> Context {
    let mut context = Context::new();
    context.insert("cache_buster", &state.cache_busting_string);
    context.insert("lang", language.language().code());
    context.insert("other_lang", language.language().other().code());
    context.insert("t", &language.strings());
    context.insert("title", language.tr(title_key));
    context
}

pub(super) fn html_response(body: String) -> Response {
    Response::builder(StatusCode::Ok)
        .content_type(mime::HTML)
        .body(body)
        .build()
}
