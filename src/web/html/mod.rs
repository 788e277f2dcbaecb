use serde::{Deserialize, Serialize};
use tide::http::Cookie;
use tide::{Redirect, Request, Response, StatusCode};
use url::Url;

use evermore_api_structs::{index, Filter, GalleryState};

use crate::analytics::Event;
use crate::catalogue::{ContentProvider, GalleryProvider};
use crate::client_area::{LoginForm, DEMO_EMAIL};
use crate::gallery::{GalleryBrowser, Key};
use crate::i18n::{Language, LanguageContext, LANGUAGE_COOKIE};
use crate::models::gallery::LightboxMedia;
use crate::web::language_context;

mod utils;

use utils::{base_context, html_response, render};

pub(in super::super) fn mount(route: &mut tide::Server<crate::State>) {
    route.at("/").get(landing);

    route.at("/gallery").get(gallery);
    route.at("/gallery/book").get(book_cta);

    route.at("/client-area").get(client_area).post(client_login);

    route.at("/language/:code").get(set_language);
}

async fn landing(req: Request<crate::State>) -> tide::Result<Response> {
    let state = req.state();
    let language = language_context(&req);
    let lang = language.language();

    let packages: Vec<_> = state.catalogue.packages().iter().map(|p| p.view(lang)).collect();
    let testimonials: Vec<_> = state
        .catalogue
        .testimonials()
        .iter()
        .map(|t| t.view(lang))
        .collect();
    let faq: Vec<_> = state.catalogue.faq().iter().map(|f| f.view(lang)).collect();

    let mut context = base_context(state, &language, "nav_home");
    context.insert("packages", &packages);
    context.insert("testimonials", &testimonials);
    context.insert("faq", &faq);
    context.insert("contact", &state.catalogue.contact().view(lang));

    let body = render(state, "landing.html", &context)?;
    Ok(html_response(body))
}

/// Which control produced a gallery request; drives analytics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
enum Via {
    Filter,
    Grid,
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
struct GalleryQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Filter>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "index::saturating_opt"
    )]
    visible: Option<usize>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "index::saturating_opt"
    )]
    open: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    via: Option<Via>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

impl GalleryQueryParams {
    fn from_state(state: GalleryState) -> Self {
        GalleryQueryParams {
            category: (state.filter != Filter::All).then_some(state.filter),
            visible: state.visible,
            open: state.open,
            ..Default::default()
        }
    }

    fn state(&self) -> GalleryState {
        GalleryState {
            filter: self.category.unwrap_or_default(),
            visible: self.visible,
            open: self.open,
        }
    }

    fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.visible.is_none()
            && self.open.is_none()
            && self.via.is_none()
            && self.key.is_none()
    }

    fn href(&self) -> tide::Result<String> {
        let qs = serde_qs::to_string(self)?;
        if qs.is_empty() {
            Ok("/gallery".to_string())
        } else {
            Ok(format!("/gallery?{}", qs))
        }
    }
}

fn state_href(state: GalleryState) -> tide::Result<String> {
    GalleryQueryParams::from_state(state).href()
}

#[derive(Debug, Serialize)]
struct FilterLink {
    key: &'static str,
    label: &'static str,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct GridItem {
    id: u32,
    src: &'static str,
    alt: &'static str,
    caption: &'static str,
    is_video: bool,
    href: String,
}

#[derive(Debug, Serialize)]
struct LightboxView {
    id: u32,
    media: LightboxMedia,
    caption: &'static str,
    date: String,
    position: usize,
    total: usize,
    prev_href: String,
    next_href: String,
    close_href: String,
    key_href: String,
}

fn track_gallery_request(
    state: &crate::State,
    query: &GalleryQueryParams,
    browser: &GalleryBrowser<'_>,
) {
    let event = match query.via {
        Some(Via::Grid) => browser.active_item().map(|item| Event::GalleryOpen(item.id)),
        Some(Via::Filter) => Some(Event::GalleryFilter(browser.filter())),
        None if query.is_empty() => Some(Event::GalleryView),
        None => None,
    };
    if let Some(event) = event {
        state.analytics.track(event);
    }
}

fn lightbox_view(
    browser: &GalleryBrowser<'_>,
    language: Language,
) -> tide::Result<Option<LightboxView>> {
    let (index, item) = match (browser.active_index(), browser.active_item()) {
        (Some(index), Some(item)) => (index, item),
        _ => return Ok(None),
    };

    let mut prev = browser.clone();
    prev.previous();
    let mut next = browser.clone();
    next.next();
    let mut closed = browser.clone();
    closed.close();

    let mut key_query = GalleryQueryParams::from_state(browser.state());
    key_query.key = Some(String::new());

    Ok(Some(LightboxView {
        id: item.id,
        media: LightboxMedia::for_item(item, language),
        caption: item.caption.get(language),
        date: language.format_date(item.date),
        position: index + 1,
        total: browser.visible_count(),
        prev_href: state_href(prev.state())?,
        next_href: state_href(next.state())?,
        close_href: state_href(closed.state())?,
        key_href: key_query.href()?,
    }))
}

async fn gallery(req: Request<crate::State>) -> tide::Result<Response> {
    let state = req.state();
    let query: GalleryQueryParams = req.query()?;

    let items = state.catalogue.gallery_items();
    let mut browser = GalleryBrowser::restore(items, state.args.window(), query.state());

    if let Some(name) = query.key.as_deref() {
        match Key::from_name(name) {
            Some(key) => {
                browser.handle_key(key);
            },
            None => tracing::debug!(key = name, "ignoring unhandled gallery key"),
        }
        return Ok(Redirect::new(state_href(browser.state())?).into());
    }

    track_gallery_request(state, &query, &browser);

    let language = language_context(&req);
    let lang = language.language();

    let filters = Filter::EVERY
        .into_iter()
        .map(|filter| -> tide::Result<FilterLink> {
            let query = GalleryQueryParams {
                category: (filter != Filter::All).then_some(filter),
                via: Some(Via::Filter),
                ..Default::default()
            };
            Ok(FilterLink {
                key: filter.as_str(),
                label: language.tr(filter_label_key(filter)),
                href: query.href()?,
                active: filter == browser.filter(),
            })
        })
        .collect::<tide::Result<Vec<_>>>()?;

    let grid = browser
        .visible()
        .iter()
        .enumerate()
        .map(|(index, item)| -> tide::Result<GridItem> {
            let mut opened = browser.clone();
            opened.open(index);
            let mut query = GalleryQueryParams::from_state(opened.state());
            query.via = Some(Via::Grid);
            Ok(GridItem {
                id: item.id,
                src: item.src,
                alt: item.alt.get(lang),
                caption: item.caption.get(lang),
                is_video: item.is_video,
                href: query.href()?,
            })
        })
        .collect::<tide::Result<Vec<_>>>()?;

    let load_more_href = if browser.has_more() {
        let mut more = browser.clone();
        more.load_more();
        Some(state_href(more.state())?)
    } else {
        None
    };


    let mut context = base_context(state, &language, "gallery_title");
    context.insert("filters", &filters);
    context.insert("items", &grid);
    context.insert("shown", &browser.visible_count());
    context.insert("total", &browser.filtered().len());
    context.insert("load_more_href", &load_more_href);
    context.insert("lightbox", &lightbox_view(&browser, lang)?);

    let body = render(state, "gallery.html", &context)?;
    Ok(html_response(body))
}

fn filter_label_key(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "filter_all",
        Filter::Wedding => "filter_wedding",
        Filter::Details => "filter_details",
        Filter::Video => "filter_video",
    }
}

async fn book_cta(req: Request<crate::State>) -> tide::Result<Response> {
    req.state().analytics.track(Event::GalleryBookCta);
    Ok(Redirect::new("/#contact").into())
}

#[derive(Debug, Serialize)]
struct ClientFeature {
    title: &'static str,
    text: &'static str,
}

fn client_area_context(
    state: &crate::State,
    language: &LanguageContext,
    authenticated: bool,
) -> tera::Context {
    let features: Vec<_> = [
        ("client_security", "client_security_text"),
        ("client_files", "client_files_text"),
        ("client_sharing", "client_sharing_text"),
    ]
    .into_iter()
    .map(|(title, text)| ClientFeature {
        title: language.tr(title),
        text: language.tr(text),
    })
    .collect();

    let mut context = base_context(state, language, "client_title");
    context.insert("authenticated", &authenticated);
    context.insert("features", &features);
    context.insert("demo_code", state.credentials.access_code());
    context.insert("demo_email", DEMO_EMAIL);
    context.insert("photos", &(1..=6).collect::<Vec<u32>>());
    context
}

async fn client_area(req: Request<crate::State>) -> tide::Result<Response> {
    let state = req.state();
    let language = language_context(&req);

    let context = client_area_context(state, &language, false);
    let body = render(state, "client-area.html", &context)?;
    Ok(html_response(body))
}

async fn client_login(mut req: Request<crate::State>) -> tide::Result<Response> {
    let form: LoginForm = req.body_form().await?;
    let state = req.state();
    let language = language_context(&req);

    let authenticated = state.credentials.accepts(&form);
    tracing::info!(authenticated, "client area login attempt");

    let mut context = client_area_context(state, &language, authenticated);
    if !authenticated {
        context.insert("error", language.tr("client_invalid"));
        context.insert("entered_email", &form.email);
    }

    let body = render(state, "client-area.html", &context)?;
    Ok(html_response(body))
}

/// Path and query of the referring page. Paths that a browser would read as
/// another host (`//host/...`) are refused.
fn local_path(referer: &str) -> Option<String> {
    let url = Url::parse(referer).ok()?;
    let path = url.path();
    if !path.starts_with('/') || path.starts_with("//") {
        return None;
    }
    Some(match url.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    })
}

fn local_referer(req: &Request<crate::State>) -> Option<String> {
    local_path(req.header("Referer")?.last().as_str())
}

async fn set_language(req: Request<crate::State>) -> tide::Result<Response> {
    let state = req.state();
    let requested: Language = match req.param("code")?.parse() {
        Ok(language) => language,
        Err(_) => return Ok(Response::builder(StatusCode::NotFound).build()),
    };

    let mut language = language_context(&req);
    let analytics = state.analytics.clone();
    language.subscribe(move |switched| analytics.track(Event::LanguageSwitch(switched)));
    language.set(requested);

    let target = local_referer(&req).unwrap_or_else(|| "/".to_string());
    let mut res: Response = Redirect::new(target).into();
    res.insert_cookie(
        Cookie::build(LANGUAGE_COOKIE, language.language().code())
            .path("/")
            .finish(),
    );
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referer_keeps_path_and_query() {
        assert_eq!(
            local_path("https://evermore.bg/gallery?category=video").as_deref(),
            Some("/gallery?category=video")
        );
        assert_eq!(local_path("https://evermore.bg").as_deref(), Some("/"));
    }

    #[test]
    fn referer_never_points_off_site() {
        assert_eq!(local_path("https://evermore.bg//evil.example/phish"), None);
        assert_eq!(local_path("https://evermore.bg/\\evil.example/phish"), None);
        assert_eq!(local_path("mailto:someone@evil.example"), None);
        assert_eq!(local_path("not a url"), None);
    }

    #[test]
    fn oversized_positions_still_parse() {
        let query: GalleryQueryParams =
            serde_qs::from_str("open=99999999999999999999999&visible=-1").unwrap();
        assert_eq!(query.open, Some(usize::MAX));
        assert_eq!(query.visible, Some(0));
    }

    #[test]
    fn default_state_has_a_bare_href() {
        assert_eq!(state_href(GalleryState::default()).unwrap(), "/gallery");
    }

    #[test]
    fn href_carries_only_set_fields() {
        let state = GalleryState {
            filter: Filter::Wedding,
            visible: None,
            open: Some(2),
        };
        assert_eq!(state_href(state).unwrap(), "/gallery?category=wedding&open=2");
    }

    #[test]
    fn query_round_trips_state() {
        let state = GalleryState {
            filter: Filter::Details,
            visible: Some(24),
            open: Some(0),
        };
        let href = state_href(state).unwrap();
        let query: GalleryQueryParams =
            serde_qs::from_str(href.trim_start_matches("/gallery?")).unwrap();
        assert_eq!(query.state(), state);
    }
}
