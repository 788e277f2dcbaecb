use time::macros::date;

use evermore_api_structs::Category;

use crate::i18n::Localized;
use crate::models::gallery::GalleryItem;

pub(super) static GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        src: "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&h=1200&fit=crop&auto=format&fm=webp&q=85",
        alt: Localized::new(
            "Сватбена фотография - Плевен, България",
            "Wedding photography - Pleven, Bulgaria",
        ),
        category: Category::Wedding,
        caption: Localized::new(
            "Сватба на Мария и Георги – Септември 2024",
            "Wedding of Maria & Georgi – September 2024",
        ),
        date: date!(2024 - 09 - 15),
        is_video: false,
    },
    GalleryItem {
        id: 2,
        src: "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=800&h=600&fit=crop&auto=format&fm=webp&q=85",
        alt: Localized::new("Сватбени детайли - пръстени", "Wedding details - rings"),
        category: Category::Details,
        caption: Localized::new(
            "Детайли от сватбата на Иван и Елена – Юли 2024",
            "Details from Ivan & Elena's wedding – July 2024",
        ),
        date: date!(2024 - 07 - 20),
        is_video: false,
    },
    GalleryItem {
        id: 3,
        src: "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800&h=1000&fit=crop&auto=format&fm=webp&q=85",
        alt: Localized::new("Сватбена церемония", "Wedding ceremony"),
        category: Category::Wedding,
        caption: Localized::new(
            "Сватба на София и Димитър – Май 2024",
            "Wedding of Sofia & Dimitar – May 2024",
        ),
        date: date!(2024 - 05 - 18),
        is_video: false,
    },
    GalleryItem {
        id: 4,
        src: "https://images.unsplash.com/photo-1465495976277-4387d4b0e4a6?w=800&h=600&fit=crop&auto=format&fm=webp&q=85",
        alt: Localized::new("Сватбен букет", "Wedding bouquet"),
        category: Category::Details,
        caption: Localized::new("Сватбени детайли – Август 2024", "Wedding details – August 2024"),
        date: date!(2024 - 08 - 10),
        is_video: false,
    },
    GalleryItem {
        id: 5,
        src: "https://images.unsplash.com/photo-1583939003579-730e3918a45a?w=800&h=1200&fit=crop&auto=format&fm=webp&q=85",
        alt: Localized::new("Сватбено видео", "Wedding video"),
        category: Category::Video,
        caption: Localized::new(
            "Сватбено видео на Петър и Анна – Юни 2024",
            "Wedding video of Peter & Anna – June 2024",
        ),
        date: date!(2024 - 06 - 22),
        is_video: true,
    },
    GalleryItem {
        id: 6,
        src: "https://images.unsplash.com/photo-1520854221256-17451cc331bf?w=800&h=800&fit=crop&auto=format&fm=webp&q=85",
        alt: Localized::new("Първи танц", "First dance"),
        category: Category::Wedding,
        caption: Localized::new("Първи танц – Октомври 2024", "First dance – October 2024"),
        date: date!(2024 - 10 - 05),
        is_video: false,
    },
];
