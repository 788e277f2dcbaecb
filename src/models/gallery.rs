use serde::Serialize;
use time::Date;

use evermore_api_structs::{Category, ItemPayload};

use crate::i18n::{Language, Localized};

pub type ItemId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub src: &'static str,
    pub alt: Localized<&'static str>,
    pub category: Category,
    pub caption: Localized<&'static str>,
    pub date: Date,
    pub is_video: bool,
}

impl GalleryItem {
    pub fn to_payload(&self, language: Language) -> ItemPayload {
        ItemPayload {
            id: self.id,
            src: self.src.to_string(),
            alt: self.alt.get(language).to_string(),
            category: self.category,
            caption: self.caption.get(language).to_string(),
            date: self.date.to_string(),
            is_video: self.is_video,
        }
    }
}

/// What the lightbox shows for an item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LightboxMedia {
    Image { src: String, alt: String },
    Video { poster: String, label: String },
}

impl LightboxMedia {
    pub fn for_item(item: &GalleryItem, language: Language) -> Self {
        if item.is_video {
            LightboxMedia::Video {
                poster: item.src.to_string(),
                label: item.caption.get(language).to_string(),
            }
        } else {
            LightboxMedia::Image {
                src: item.src.to_string(),
                alt: item.alt.get(language).to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn item(is_video: bool) -> GalleryItem {
        GalleryItem {
            id: 5,
            src: "https://example.com/5.webp",
            alt: Localized::new("Сватбено видео", "Wedding video"),
            category: Category::Video,
            caption: Localized::new("Видео", "Video of Peter & Anna"),
            date: date!(2024 - 06 - 22),
            is_video,
        }
    }

    #[test]
    fn video_items_get_a_player_placeholder() {
        assert_eq!(
            LightboxMedia::for_item(&item(true), Language::En),
            LightboxMedia::Video {
                poster: "https://example.com/5.webp".into(),
                label: "Video of Peter & Anna".into(),
            }
        );
    }

    #[test]
    fn photos_get_an_image() {
        assert_eq!(
            LightboxMedia::for_item(&item(false), Language::Bg),
            LightboxMedia::Image {
                src: "https://example.com/5.webp".into(),
                alt: "Сватбено видео".into(),
            }
        );
    }

    #[test]
    fn payload_is_localized() {
        let payload = item(true).to_payload(Language::Bg);
        assert_eq!(payload.caption, "Видео");
        assert_eq!(payload.date, "2024-06-22");
        assert!(payload.is_video);
    }
}
