use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

use super::{Language, Localized};

/// `(key, bg, en)`
const ENTRIES: &[(&str, &str, &str)] = &[
    // navigation
    ("brand", "Evermore Weddings", "Evermore Weddings"),
    ("nav_home", "Начало", "Home"),
    ("nav_gallery", "Галерия", "Gallery"),
    ("nav_pricing", "Пакети и цени", "Packages & Pricing"),
    ("nav_about", "За нас", "About"),
    ("nav_contact", "Контакти", "Contact"),
    ("nav_client_area", "Клиентска зона", "Client Area"),
    ("language_bg", "БГ", "БГ"),
    ("language_en", "EN", "EN"),
    // hero
    (
        "hero_image_alt",
        "Професионална сватбена фотография - младоженци в романтична обстановка",
        "Professional wedding photography - couple in romantic setting",
    ),
    ("hero_title", "Вашата любов, уловена завинаги", "Your Love, Captured Forever"),
    (
        "hero_subtitle",
        "Професионален екип от 5 души за най-важния ден във вашия живот",
        "Professional team of 5 for the most important day of your life",
    ),
    ("hero_view_pricing", "Вижте цените", "View Pricing"),
    ("hero_client_gallery", "Клиентска галерия", "Client Gallery"),
    // pricing
    ("pricing_title", "Сватбени пакети", "Wedding Packages"),
    (
        "pricing_subtitle",
        "Изберете перфектния пакет за вашата сватба",
        "Choose the perfect package for your wedding",
    ),
    ("pricing_popular", "НАЙ-ПОПУЛЯРЕН", "MOST POPULAR"),
    ("pricing_choose", "Избери пакет", "Choose Package"),
    ("pricing_currency", "лв", "BGN"),
    (
        "trust_title",
        "Всички пакети включват стилна USB кутия и официален договор",
        "All packages include a stylish USB box and official contract",
    ),
    (
        "trust_text",
        "Професионално обслужване с гаранция за качество и сигурност на вашите спомени",
        "Professional service with guarantee for quality and security of your memories",
    ),
    // testimonials
    ("testimonials_title", "Отзиви от клиенти", "Client Testimonials"),
    ("testimonials_subtitle", "Какво казват нашите клиенти", "What our clients say"),
    // faq
    ("faq_title", "Често задавани въпроси", "Frequently Asked Questions"),
    (
        "faq_subtitle",
        "Отговори на най-честите въпроси за нашите услуги",
        "Answers to the most common questions about our services",
    ),
    // about
    ("about_title", "За нас", "About Us"),
    (
        "about_text",
        "Ние сме екип от професионални фотографи, посветени на улавянето на най-важните моменти във вашия живот.",
        "We are a team of professional photographers dedicated to capturing the most important moments in your life.",
    ),
    ("about_passion", "Страст", "Passion"),
    ("about_quality", "Качество", "Quality"),
    ("about_team", "Екип", "Team"),
    (
        "about_value_text",
        "Описание на нашите ценности и подход към работата.",
        "Description of our values and approach to work.",
    ),
    // client gallery teaser
    ("teaser_title", "Вашата персонална онлайн галерия", "Your personal online gallery"),
    (
        "teaser_description",
        "Всяка двойка получава защитена с парола онлайн галерия, където може да разглежда, изтегля и споделя своите сватбени снимки с близки и приятели. Галерията остава активна 1 година след сватбата.",
        "Every couple receives a password-protected online gallery where they can view, download and share their wedding photos with family and friends. The gallery remains active for 1 year after the wedding.",
    ),
    ("teaser_button", "Отворете галерията", "Open gallery"),
    // lead magnet
    ("lead_title", "Готови сте за вашия специален ден?", "Ready for your special day?"),
    (
        "lead_description",
        "Свържете се с нас за безплатна консултация и персонализирана оферта",
        "Contact us for a free consultation and personalized quote",
    ),
    ("form_your_name", "Вашето име", "Your name"),
    ("form_your_message", "Вашето съобщение", "Your message"),
    ("form_email", "Email", "Email"),
    ("form_phone", "Телефон", "Phone"),
    ("form_send", "Изпрати съобщение", "Send Message"),
    // contact
    ("contact_title", "Свържете се с нас", "Get in Touch"),
    (
        "contact_subtitle",
        "Готови сме да създадем магията на вашия специален ден",
        "Ready to create the magic of your special day",
    ),
    ("contact_name", "Име", "Name"),
    ("contact_wedding_date", "Дата на сватбата", "Wedding Date"),
    (
        "contact_story",
        "Разкажете ни за вашата сватба...",
        "Tell us about your wedding...",
    ),
    ("contact_info", "Информация за контакт", "Contact Information"),
    ("contact_location", "Локация", "Location"),
    ("contact_follow", "Последвайте ни", "Follow Us"),
    ("contact_hours", "Работно време", "Working Hours"),
    ("hours_weekdays", "Понеделник - Петък", "Monday - Friday"),
    ("hours_saturday", "Събота", "Saturday"),
    ("hours_sunday", "Неделя", "Sunday"),
    ("hours_by_appointment", "По договаряне", "By appointment"),
    ("sticky_book_date", "Резервирай дата", "Book Date"),
    (
        "footer_copyright",
        "© 2024 Evermore Weddings. Всички права запазени.",
        "© 2024 Evermore Weddings. All rights reserved.",
    ),
    // public gallery
    ("gallery_title", "Галерия", "Gallery"),
    ("gallery_subtitle", "Истории, разказани чрез снимки", "Stories told through images"),
    ("gallery_hero_alt", "Галерия - Evermore Weddings", "Gallery - Evermore Weddings"),
    ("gallery_filter_by", "Филтрирай по", "Filter by"),
    ("filter_all", "Всички", "All"),
    ("filter_wedding", "Сватбени истории", "Wedding Stories"),
    ("filter_details", "Детайли", "Details"),
    ("filter_video", "Видео", "Video"),
    ("gallery_showing", "Показани", "Showing"),
    ("gallery_of", "от", "of"),
    ("gallery_empty", "Няма снимки в тази категория", "No photos in this category"),
    ("gallery_load_more", "Покажи още", "Load More"),
    (
        "gallery_cta_title",
        "Всяка снимка е част от една история. Създайте вашата.",
        "Every photo is part of a story. Let's create yours.",
    ),
    ("gallery_book", "Резервирайте дата", "Book a Date"),
    ("gallery_close", "Затвори", "Close"),
    ("gallery_previous", "Предишна", "Previous"),
    ("gallery_next", "Следваща", "Next"),
    ("gallery_play_video", "Пусни видеото", "Play video"),
    // client area
    ("client_title", "Клиентска зона", "Client Area"),
    (
        "client_prompt",
        "Въведете вашия код за достъп до снимките",
        "Enter your access code to view your photos",
    ),
    ("client_code", "Код за достъп", "Access Code"),
    ("client_code_placeholder", "Въведете кода", "Enter code"),
    ("client_email_placeholder", "Въведете имейла си", "Enter your email"),
    ("client_login", "Влез", "Login"),
    ("client_invalid", "Невалиден код или имейл", "Invalid code or email"),
    ("client_demo_hint", "За демо използвайте:", "For demo use:"),
    ("client_demo_code_label", "Код:", "Code:"),
    ("client_security", "Сигурност", "Security"),
    (
        "client_security_text",
        "Вашите снимки са защитени с парола",
        "Your photos are password protected",
    ),
    ("client_files", "Висококачествени файлове", "High Quality Files"),
    ("client_files_text", "Изтегляне в пълна резолюция", "Download in full resolution"),
    ("client_sharing", "Лесно споделяне", "Easy Sharing"),
    (
        "client_sharing_text",
        "Споделете с приятели и семейство",
        "Share with friends and family",
    ),
    ("client_welcome", "Добре дошли в клиентската зона", "Welcome to Client Area"),
    (
        "client_ready",
        "Вашите снимки са готови за изтегляне",
        "Your photos are ready for download",
    ),
    ("client_demo_gallery", "Демо галерия", "Demo Gallery"),
    (
        "client_demo_text",
        "Това е демо версия на клиентската зона. В реалната версия тук ще видите вашите снимки.",
        "This is a demo version of the client area. In the real version you will see your photos here.",
    ),
    ("client_photo", "Снимка", "Photo"),
    ("client_logout", "Излез", "Logout"),
];

static INDEX: Lazy<HashMap<&'static str, Localized<&'static str>>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(key, bg, en)| (key, Localized::new(bg, en)))
        .collect()
});

/// Missing keys fall back to the key itself.
pub fn tr<'k>(language: Language, key: &'k str) -> &'k str {
    match INDEX.get(key) {
        Some(text) => text.get(language),
        None => {
            tracing::warn!(key, language = %language, "missing translation");
            key
        },
    }
}

pub fn strings(language: Language) -> BTreeMap<&'static str, &'static str> {
    INDEX
        .iter()
        .map(|(&key, text)| (key, text.get(language)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for (key, _, _) in ENTRIES {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }

    #[test]
    fn every_key_has_both_languages() {
        for (key, bg, en) in ENTRIES {
            assert!(!bg.trim().is_empty(), "{key} has no bg text");
            assert!(!en.trim().is_empty(), "{key} has no en text");
        }
    }

    #[test]
    fn lookup_by_language() {
        assert_eq!(tr(Language::Bg, "gallery_close"), "Затвори");
        assert_eq!(tr(Language::En, "gallery_close"), "Close");
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(tr(Language::Bg, "no_such_key"), "no_such_key");
    }

    #[test]
    fn strings_cover_the_table() {
        assert_eq!(strings(Language::En).len(), ENTRIES.len());
    }
}
