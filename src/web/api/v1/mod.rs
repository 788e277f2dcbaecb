use serde::Deserialize;
use tide::{Request, Response};

use evermore_api_structs::{
    Filter, GalleryAction, GalleryState, ItemPayload, TransitionPayload, TransitionResponse,
};

use crate::analytics::Event;
use crate::catalogue::GalleryProvider;
use crate::gallery::GalleryBrowser;
use crate::web::api::utils::resolve_language;

pub(super) fn mount(mut route: tide::Route<crate::State>) {
    route.at("/gallery/items").get(list_items);
    route.at("/gallery/transition").post(transition);
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemsQuery {
    category: Filter,
    language: Option<String>,
}

async fn list_items(req: Request<crate::State>) -> tide::Result<Response> {
    let query: ItemsQuery = req.query()?;
    let language = require_language!(req, query.language.as_deref());
    let state = req.state();

    let items: Vec<ItemPayload> =
        crate::gallery::filter_items(state.catalogue.gallery_items(), query.category)
            .into_iter()
            .map(|item| item.to_payload(language))
            .collect();

    let res = Response::builder(tide::http::StatusCode::Ok)
        .body(tide::Body::from_json(&items)?)
        .build();
    Ok(res)
}

async fn transition(mut req: Request<crate::State>) -> tide::Result<Response> {
    let payload: TransitionPayload = req.body_json().await?;
    tracing::debug!(?payload, "gallery transition");
    let language = require_language!(req, payload.language.as_deref());
    let state = req.state();

    let mut browser = GalleryBrowser::restore(
        state.catalogue.gallery_items(),
        state.args.window(),
        payload.state,
    );
    browser.apply(&payload.action);

    match &payload.action {
        GalleryAction::SelectCategory { filter } => {
            state.analytics.track(Event::GalleryFilter(*filter))
        },
        GalleryAction::Open { .. } => {
            if let Some(item) = browser.active_item() {
                state.analytics.track(Event::GalleryOpen(item.id));
            }
        },
        _ => {},
    }

    let response = respond_with(&browser, language);
    let res = Response::builder(tide::http::StatusCode::Ok)
        .body(tide::Body::from_json(&response)?)
        .build();
    Ok(res)
}

fn respond_with(browser: &GalleryBrowser<'_>, language: crate::i18n::Language) -> TransitionResponse {
    let state: GalleryState = browser.state();
    TransitionResponse {
        state,
        items: browser
            .visible()
            .iter()
            .map(|item| item.to_payload(language))
            .collect(),
        total: browser.filtered().len(),
        has_more: browser.has_more(),
        active: browser.active_item().map(|item| item.to_payload(language)),
    }
}
