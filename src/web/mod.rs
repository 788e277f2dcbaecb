use tide::Request;

use crate::i18n::{LanguageContext, LANGUAGE_COOKIE};

pub mod api;
pub mod html;

pub(super) fn mount(app: &mut tide::Server<crate::State>) {
    html::mount(app);
    api::mount(app.at("/api"));
}

/// Language of the request: the stored cookie preference, else the
/// configured default.
pub(crate) fn language_context(req: &Request<crate::State>) -> LanguageContext {
    let preference = req.cookie(LANGUAGE_COOKIE);
    LanguageContext::from_preference(
        preference.as_ref().map(|cookie| cookie.value()),
        req.state().args.default_language(),
    )
}
