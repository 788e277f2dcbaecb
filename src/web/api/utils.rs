use tide::Request;

use crate::i18n::{Language, UnknownLanguage};
use crate::web::language_context;

/// Language for an API response. An explicit code wins over the stored
/// preference; an explicit code that is not supported is an error rather
/// than a silent fallback.
pub fn resolve_language(
    req: &Request<crate::State>,
    explicit: Option<&str>,
) -> Result<Language, UnknownLanguage> {
    match explicit {
        Some(code) => code.parse(),
        None => Ok(language_context(req).language()),
    }
}

macro_rules! require_language {
    ($request:expr, $explicit:expr) => {
        match resolve_language(&$request, $explicit) {
            Ok(language) => language,
            Err(err) => {
                return Ok(tide::Response::builder(tide::http::StatusCode::BadRequest)
                    .body(tide::convert::json!({ "reason": err.to_string() }))
                    .build())
            },
        }
    };
}
