use std::fmt;
use std::sync::Arc;

use evermore_api_structs::Filter;
use thiserror::Error;

use crate::i18n::Language;
use crate::models::gallery::ItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    GalleryView,
    GalleryFilter(Filter),
    GalleryOpen(ItemId),
    GalleryBookCta,
    LanguageSwitch(Language),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::GalleryView => f.write_str("gallery_view"),
            Event::GalleryFilter(filter) => write!(f, "gallery_filter_{}", filter),
            Event::GalleryOpen(id) => write!(f, "gallery_open_{}", id),
            Event::GalleryBookCta => f.write_str("gallery_book_cta"),
            Event::LanguageSwitch(language) => write!(f, "language_{}", language),
        }
    }
}

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("analytics sink unavailable: {0}")]
    Unavailable(String),
}

/// Receives analytics events. Implementations must not block.
pub trait AnalyticsSink: fmt::Debug + Send + Sync {
    fn record(&self, event: &Event) -> Result<(), AnalyticsError>;
}

/// Writes each event as a structured log line on the `analytics` target.
#[derive(Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: &Event) -> Result<(), AnalyticsError> {
        tracing::info!(target: "analytics", event = %event, "analytics event");
        Ok(())
    }
}

/// Best-effort front for an optional sink.
#[derive(Clone, Debug, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Analytics { sink: Some(sink) }
    }

    pub fn disabled() -> Self {
        Analytics { sink: None }
    }

    pub fn track(&self, event: Event) {
        let sink = match &self.sink {
            Some(sink) => sink,
            None => return,
        };
        if let Err(err) = sink.record(&event) {
            tracing::debug!("dropping analytics event {}: {}", event, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl AnalyticsSink for Recorder {
        fn record(&self, event: &Event) -> Result<(), AnalyticsError> {
            self.0.lock().unwrap().push(event.to_string());
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl AnalyticsSink for Broken {
        fn record(&self, _: &Event) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn event_names() {
        assert_eq!(Event::GalleryView.to_string(), "gallery_view");
        assert_eq!(Event::GalleryFilter(Filter::Details).to_string(), "gallery_filter_details");
        assert_eq!(Event::GalleryOpen(5).to_string(), "gallery_open_5");
        assert_eq!(Event::GalleryBookCta.to_string(), "gallery_book_cta");
        assert_eq!(Event::LanguageSwitch(Language::En).to_string(), "language_en");
    }

    #[test]
    fn forwards_to_sink() {
        let recorder = Arc::new(Recorder::default());
        let analytics = Analytics::new(recorder.clone());
        analytics.track(Event::GalleryView);
        analytics.track(Event::GalleryOpen(2));
        assert_eq!(*recorder.0.lock().unwrap(), vec!["gallery_view", "gallery_open_2"]);
    }

    #[test]
    fn missing_or_failing_sink_is_silent() {
        Analytics::disabled().track(Event::GalleryView);
        Analytics::new(Arc::new(Broken)).track(Event::GalleryBookCta);
    }
}
