use std::sync::Arc;

use opentelemetry_tide::TideExt;
use structopt::StructOpt;

pub mod analytics;
pub mod catalogue;
pub mod client_area;
pub mod gallery;
pub mod i18n;
pub mod models;
pub mod telemetry;
pub mod web;

use analytics::{Analytics, TracingSink};
use catalogue::Catalogue;
use client_area::DemoCredentials;
use gallery::Window;
use i18n::Language;

#[derive(Clone, Debug)]
pub struct State {
    pub args: Arc<Args>,
    pub tera: Arc<tera::Tera>,
    pub catalogue: Arc<Catalogue>,
    pub credentials: Arc<DemoCredentials>,
    pub analytics: Analytics,
    pub cache_busting_string: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    TemplateParseError(tera::Error),
    TemplatePathError(std::io::Error),
    TelemetryInitError(anyhow::Error),
    ListenError(std::io::Error),
}

impl From<Error> for u8 {
    fn from(error: Error) -> u8 {
        match error {
            Error::TemplateParseError(_) => 3,
            Error::TelemetryInitError(_) => 4,
            Error::TemplatePathError(_) => 5,
            Error::ListenError(_) => 6,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TemplateParseError(err) => {
                write!(f, "Template parsing error: {}", err)
            },
            Error::TemplatePathError(err) => {
                write!(f, "Template path error: {}", err)
            },
            Error::TelemetryInitError(err) => {
                write!(f, "Failed to init telemetry: {}", err)
            },
            Error::ListenError(err) => {
                write!(f, "Failed to start HTTP listener: {}", err)
            },
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Args {
    /// Host address to bind to.
    #[structopt(long, default_value = "localhost", env = "EVERMORE_BIND_ADDRESS")]
    address: String,
    /// Port to bind to.
    #[structopt(long, default_value = "8166", env = "EVERMORE_BIND_PORT")]
    port: u16,

    /// Language used when the visitor has no stored preference (bg or en).
    #[structopt(long, default_value = "bg", env = "EVERMORE_DEFAULT_LANGUAGE")]
    default_language: Language,

    /// Number of gallery items shown before "load more"
    #[structopt(long, default_value = "12", env = "EVERMORE_GALLERY_WINDOW")]
    gallery_window: usize,

    /// Number of gallery items each "load more" adds
    #[structopt(long, default_value = "12", env = "EVERMORE_GALLERY_PAGE_SIZE")]
    gallery_page_size: usize,

    /// Access code accepted by the client area demo.
    #[structopt(
        long,
        default_value = "DEMO2024",
        env = "EVERMORE_DEMO_ACCESS_CODE",
        hide_env_values = true
    )]
    demo_access_code: String,

    /// Do not emit analytics events.
    #[structopt(long)]
    disable_analytics: bool,

    /// Path to Tera templates directory
    #[structopt(
        long,
        parse(from_os_str),
        default_value = "./templates",
        env = "EVERMORE_TEMPLATE_PATH"
    )]
    template_path: std::path::PathBuf,
}

impl Args {
    pub fn window(&self) -> Window {
        Window {
            initial: self.gallery_window,
            page_size: self.gallery_page_size.max(1),
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }
}

pub fn build_state(args: Args) -> Result<State, Error> {
    let template_path = args
        .template_path
        .canonicalize()
        .map_err(Error::TemplatePathError)?;
    let tera = match tera::Tera::new(&template_path.join("**/*.html").to_string_lossy()) {
        Ok(t) => t,
        Err(e) => {
            return Err(Error::TemplateParseError(e));
        },
    };

    let cache_busting_string = std::fs::read_to_string(template_path.join("cache-buster"))
        .ok()
        .and_then(|data| data.split_whitespace().next().map(|s| s.to_string()));

    let analytics = if args.disable_analytics {
        Analytics::disabled()
    } else {
        Analytics::new(Arc::new(TracingSink))
    };

    Ok(State {
        credentials: Arc::new(DemoCredentials::new(args.demo_access_code.clone())),
        args: Arc::new(args),
        tera: Arc::new(tera),
        catalogue: Arc::new(Catalogue::builtin()),
        analytics,
        cache_busting_string,
    })
}

pub fn app(state: State) -> tide::Server<State> {
    let mut app = tide::with_state(state);
    web::mount(&mut app);
    app
}

pub async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    let args = Args::from_args();

    telemetry::init().map_err(Error::TelemetryInitError)?;

    let address = args.address.clone();
    let port = args.port;
    let state = build_state(args)?;

    let mut app = app(state);
    app.with_default_tracing_middleware();

    tracing::info!(%address, port, "listening");
    app.listen((address.as_str(), port))
        .await
        .map_err(Error::ListenError)?;

    Ok(())
}
