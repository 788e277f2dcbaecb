//! Bilingual (Bulgarian/English) text support.
//!
//! Every user-visible string is looked up in a single keyed table indexed by
//! [`Language`] and key, see [`table`]. The active language of a request is
//! carried explicitly in a [`LanguageContext`], which is the only place the
//! language is changed and which notifies subscribers when it does.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

pub mod table;

/// Cookie holding the visitor's language preference.
pub const LANGUAGE_COOKIE: &str = "language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bg,
    En,
}

impl Language {
    pub const EVERY: [Language; 2] = [Language::Bg, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Bg => "bg",
            Language::En => "en",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::Bg => Language::En,
            Language::En => Language::Bg,
        }
    }

    /// Formats a calendar date the way the language's locale writes it.
    pub fn format_date(self, date: Date) -> String {
        const BG: &[FormatItem<'static>] = format_description!("[day].[month].[year] г.");
        const EN: &[FormatItem<'static>] =
            format_description!("[month padding:none]/[day padding:none]/[year]");

        let format = match self {
            Language::Bg => BG,
            Language::En => EN,
        };
        date.format(format).unwrap_or_else(|_| date.to_string())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language {0:?}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::EVERY
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// A value given in both supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Localized<T> {
    pub bg: T,
    pub en: T,
}

impl<T: Copy> Localized<T> {
    pub const fn new(bg: T, en: T) -> Self {
        Localized { bg, en }
    }

    pub fn get(&self, language: Language) -> T {
        match language {
            Language::Bg => self.bg,
            Language::En => self.en,
        }
    }
}

type Subscriber = Box<dyn Fn(Language) + Send + Sync>;

/// Language state shared by the views rendering one response.
pub struct LanguageContext {
    current: Language,
    subscribers: Vec<Subscriber>,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        LanguageContext {
            current: language,
            subscribers: Vec::new(),
        }
    }

    /// Resolves the stored preference, falling back to `default` when it is
    /// missing or not a supported code.
    pub fn from_preference(preference: Option<&str>, default: Language) -> Self {
        let language = preference
            .and_then(|code| match code.parse() {
                Ok(language) => Some(language),
                Err(err) => {
                    tracing::debug!("ignoring stored language preference: {}", err);
                    None
                },
            })
            .unwrap_or(default);
        LanguageContext::new(language)
    }

    pub fn language(&self) -> Language {
        self.current
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(Language) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Switches the active language. Subscribers are only notified on an
    /// actual change; returns whether one happened.
    pub fn set(&mut self, language: Language) -> bool {
        if self.current == language {
            return false;
        }
        self.current = language;
        for subscriber in &self.subscribers {
            subscriber(language);
        }
        true
    }

    pub fn toggle(&mut self) -> Language {
        self.set(self.current.other());
        self.current
    }

    pub fn tr<'k>(&self, key: &'k str) -> &'k str {
        table::tr(self.current, key)
    }

    /// The whole table for the active language, as handed to templates.
    pub fn strings(&self) -> BTreeMap<&'static str, &'static str> {
        table::strings(self.current)
    }
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use time::macros::date;

    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("bg".parse::<Language>(), Ok(Language::Bg));
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn preference_falls_back_to_default() {
        assert_eq!(
            LanguageContext::from_preference(Some("en"), Language::Bg).language(),
            Language::En
        );
        assert_eq!(
            LanguageContext::from_preference(Some("fr"), Language::Bg).language(),
            Language::Bg
        );
        assert_eq!(
            LanguageContext::from_preference(None, Language::En).language(),
            Language::En
        );
    }

    #[test]
    fn subscribers_hear_only_real_changes() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut context = LanguageContext::new(Language::Bg);
        let sink = seen.clone();
        context.subscribe(move |language| sink.lock().unwrap().push(language));

        assert!(!context.set(Language::Bg));
        assert!(context.set(Language::En));
        assert_eq!(context.toggle(), Language::Bg);

        assert_eq!(*seen.lock().unwrap(), vec![Language::En, Language::Bg]);
    }

    #[test]
    fn dates_follow_locale_conventions() {
        let day = date!(2024 - 09 - 05);
        assert_eq!(Language::Bg.format_date(day), "05.09.2024 г.");
        assert_eq!(Language::En.format_date(day), "9/5/2024");
    }

    #[test]
    fn counter_words_follow_the_language() {
        let mut context = LanguageContext::new(Language::En);
        assert_eq!(context.tr("gallery_showing"), "Showing");
        assert_eq!(context.tr("gallery_of"), "of");

        context.toggle();
        assert_eq!(context.tr("gallery_showing"), "Показани");
        assert_eq!(context.tr("gallery_of"), "от");
    }
}
