use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wedding,
    Details,
    Video,
}

/// Gallery filter key: every category plus the `all` sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Wedding,
    Details,
    Video,
}

impl Filter {
    pub const EVERY: [Filter; 4] = [Filter::All, Filter::Wedding, Filter::Details, Filter::Video];

    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Wedding => category == Category::Wedding,
            Filter::Details => category == Category::Details,
            Filter::Video => category == Category::Video,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Wedding => "wedding",
            Filter::Details => "details",
            Filter::Video => "video",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gallery filter {:?}", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::EVERY
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Lenient deserializers for list positions.
///
/// Positions never fail to parse: negative values become 0 and values past
/// `usize::MAX` saturate, leaving the browser to clamp them into range.
pub mod index {
    use std::fmt;

    use serde::de::{self, Deserializer, Visitor};

    struct SaturatingIndex;

    impl<'de> Visitor<'de> for SaturatingIndex {
        type Value = Option<usize>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list position")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(usize::try_from(v).unwrap_or(usize::MAX)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(usize::try_from(v.max(0)).unwrap_or(usize::MAX)))
        }

        fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
            Ok(Some(usize::try_from(v).unwrap_or(usize::MAX)))
        }

        fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
            Ok(Some(usize::try_from(v.max(0)).unwrap_or(usize::MAX)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.is_nan() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            // `as` saturates and drops the fraction
            Ok(Some(v.max(0.0) as usize))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(None);
            }
            let (negative, digits) = match v.strip_prefix('-') {
                Some(digits) => (true, digits),
                None => (false, v.strip_prefix('+').unwrap_or(v)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(E::invalid_value(de::Unexpected::Str(v), &self));
            }
            if negative {
                return Ok(Some(0));
            }
            Ok(Some(digits.parse().unwrap_or(usize::MAX)))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(SaturatingIndex)
        }
    }

    pub fn saturating_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        deserializer.deserialize_any(SaturatingIndex)
    }

    pub fn saturating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        saturating_opt(deserializer)?.ok_or_else(|| de::Error::custom("missing list position"))
    }
}

/// Serialized view state of the gallery browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GalleryState {
    pub filter: Filter,
    #[serde(deserialize_with = "index::saturating_opt")]
    pub visible: Option<usize>,
    #[serde(deserialize_with = "index::saturating_opt")]
    pub open: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GalleryAction {
    SelectCategory { filter: Filter },
    LoadMore,
    Open {
        #[serde(deserialize_with = "index::saturating")]
        index: usize,
    },
    Close,
    Next,
    Previous,
    Key { key: String },
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct TransitionPayload {
    #[serde(default)]
    pub state: GalleryState,
    pub action: GalleryAction,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ItemPayload {
    pub id: u32,
    pub src: String,
    pub alt: String,
    pub category: Category,
    pub caption: String,
    pub date: String,
    pub is_video: bool,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct TransitionResponse {
    pub state: GalleryState,
    pub items: Vec<ItemPayload>,
    pub total: usize,
    pub has_more: bool,
    pub active: Option<ItemPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_its_own_names() {
        for filter in Filter::EVERY {
            assert_eq!(filter.as_str().parse::<Filter>(), Ok(filter));
        }
        assert!("portraits".parse::<Filter>().is_err());
    }

    #[test]
    fn all_matches_every_category() {
        for category in [Category::Wedding, Category::Details, Category::Video] {
            assert!(Filter::All.matches(category));
        }
        assert!(!Filter::Video.matches(Category::Wedding));
    }

    #[test]
    fn actions_use_tagged_wire_format() {
        let action: GalleryAction =
            serde_json::from_str(r#"{"type":"select_category","filter":"details"}"#).unwrap();
        assert_eq!(action, GalleryAction::SelectCategory { filter: Filter::Details });

        let action: GalleryAction = serde_json::from_str(r#"{"type":"key","key":"Escape"}"#).unwrap();
        assert_eq!(action, GalleryAction::Key { key: "Escape".into() });
    }

    #[test]
    fn positions_saturate_instead_of_failing() {
        let state: GalleryState =
            serde_json::from_str(r#"{"open":-3,"visible":99999999999999999999999}"#).unwrap();
        assert_eq!(state.open, Some(0));
        assert_eq!(state.visible, Some(usize::MAX));

        let state: GalleryState = serde_json::from_str(r#"{"open":null}"#).unwrap();
        assert_eq!(state.open, None);

        let action: GalleryAction =
            serde_json::from_str(r#"{"type":"open","index":18446744073709551616}"#).unwrap();
        assert_eq!(action, GalleryAction::Open { index: usize::MAX });

        assert!(serde_json::from_str::<GalleryState>(r#"{"open":"two"}"#).is_err());
    }

    #[test]
    fn missing_state_fields_default() {
        let state: GalleryState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, GalleryState::default());
        assert_eq!(state.filter, Filter::All);
    }
}
