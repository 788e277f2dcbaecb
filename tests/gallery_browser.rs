use evermore::catalogue::{Catalogue, GalleryProvider};
use evermore::gallery::{GalleryBrowser, Key, Window};
use evermore::i18n::Localized;
use evermore::models::gallery::GalleryItem;
use evermore_api_structs::{Category, Filter, GalleryAction, GalleryState};
use time::macros::date;

fn generated(len: u32) -> Vec<GalleryItem> {
    (1..=len)
        .map(|id| {
            let category = match id % 3 {
                0 => Category::Video,
                1 => Category::Wedding,
                _ => Category::Details,
            };
            GalleryItem {
                id,
                src: "https://example.com/photo.jpg",
                alt: Localized::new("снимка", "photo"),
                category,
                caption: Localized::new("надпис", "caption"),
                date: date!(2024 - 06 - 01),
                is_video: category == Category::Video,
            }
        })
        .collect()
}

const SMALL: Window = Window {
    initial: 4,
    page_size: 3,
};

#[test]
fn builtin_catalogue_fits_in_the_default_window() {
    let catalogue = Catalogue::builtin();
    let browser = GalleryBrowser::new(catalogue.gallery_items(), Window::default());

    assert_eq!(browser.visible_count(), 6);
    assert!(!browser.has_more());
    assert_eq!(browser.state(), GalleryState::default());
}

#[test]
fn builtin_video_filter_holds_a_single_video() {
    let catalogue = Catalogue::builtin();
    let mut browser = GalleryBrowser::new(catalogue.gallery_items(), Window::default());
    browser.select_category(Filter::Video);

    assert_eq!(browser.visible_count(), 1);
    let item = browser.open(0).expect("video item");
    assert!(item.is_video);
    assert_eq!(item.id, 5);

    // a single visible item wraps onto itself
    assert_eq!(browser.next().map(|item| item.id), Some(5));
    assert_eq!(browser.previous().map(|item| item.id), Some(5));
}

#[test]
fn next_then_previous_is_identity_everywhere() {
    for len in 1..=10 {
        let items = generated(len);
        for filter in Filter::EVERY {
            let mut browser = GalleryBrowser::new(&items, SMALL);
            browser.select_category(filter);
            for index in 0..browser.visible_count() {
                browser.open(index);
                browser.next();
                browser.previous();
                assert_eq!(browser.active_index(), Some(index), "len {} {}", len, filter);
            }
        }
    }
}

#[test]
fn stepping_visible_count_times_returns_to_start() {
    let items = generated(9);
    let mut browser = GalleryBrowser::new(&items, SMALL);
    browser.load_more();
    let count = browser.visible_count();
    browser.open(2);

    for _ in 0..count {
        browser.next();
    }
    assert_eq!(browser.active_index(), Some(2));

    for _ in 0..count {
        browser.previous();
    }
    assert_eq!(browser.active_index(), Some(2));
}

#[test]
fn load_more_grows_by_page_and_stops_at_total() {
    let items = generated(10);
    let mut browser = GalleryBrowser::new(&items, SMALL);

    let mut seen = vec![browser.visible_count()];
    while browser.load_more() {
        seen.push(browser.visible_count());
    }
    assert_eq!(seen, vec![4, 7, 10]);

    assert!(!browser.load_more());
    assert_eq!(browser.visible_count(), 10);
}

#[test]
fn category_change_resets_the_window() {
    let items = generated(12);
    let mut browser = GalleryBrowser::new(&items, SMALL);
    browser.load_more();
    browser.load_more();
    assert!(browser.visible_count() > SMALL.initial);

    browser.select_category(Filter::All);
    assert_eq!(browser.visible_count(), SMALL.initial);

    browser.select_category(Filter::Video);
    assert_eq!(browser.filtered().len(), 4);
    assert_eq!(browser.visible_count(), 4);
    assert!(browser.filtered().iter().all(|item| item.category == Category::Video));
}

#[test]
fn keys_are_inert_while_closed() {
    let items = generated(5);
    let mut browser = GalleryBrowser::new(&items, SMALL);

    for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight] {
        assert!(!browser.handle_key(key));
    }
    assert!(!browser.is_open());
    assert_eq!(browser.active_item(), None);
}

#[test]
fn arrow_left_from_first_wraps_to_last_visible() {
    let items = generated(10);
    let mut browser = GalleryBrowser::new(&items, SMALL);
    browser.open(0);

    assert!(browser.handle_key(Key::ArrowLeft));
    assert_eq!(browser.active_index(), Some(SMALL.initial - 1));

    assert!(browser.handle_key(Key::ArrowRight));
    assert_eq!(browser.active_index(), Some(0));

    assert!(browser.handle_key(Key::Escape));
    assert!(!browser.is_open());
}

#[test]
fn restored_state_round_trips() {
    let items = generated(10);
    let mut browser = GalleryBrowser::new(&items, SMALL);
    browser.apply(&GalleryAction::SelectCategory {
        filter: Filter::Wedding,
    });
    browser.apply(&GalleryAction::Open { index: 2 });
    browser.apply(&GalleryAction::Key {
        key: "ArrowRight".to_string(),
    });

    let restored = GalleryBrowser::restore(&items, SMALL, browser.state());
    assert_eq!(restored.state(), browser.state());
    assert_eq!(
        restored.active_item().map(|item| item.id),
        browser.active_item().map(|item| item.id)
    );
}

#[test]
fn out_of_range_state_is_clamped() {
    let items = generated(10);
    let state = GalleryState {
        filter: Filter::All,
        visible: Some(500),
        open: Some(99),
    };
    let browser = GalleryBrowser::restore(&items, SMALL, state);

    assert_eq!(browser.visible_count(), 10);
    assert_eq!(browser.active_index(), Some(9));

    let state = GalleryState {
        filter: Filter::All,
        visible: Some(1),
        open: None,
    };
    let browser = GalleryBrowser::restore(&items, SMALL, state);
    assert_eq!(browser.visible_count(), SMALL.initial);
}

#[test]
fn empty_catalogue_never_opens() {
    let items = generated(0);
    let mut browser = GalleryBrowser::new(&items, SMALL);

    assert_eq!(browser.visible_count(), 0);
    assert!(!browser.has_more());
    assert_eq!(browser.open(0), None);
    assert!(!browser.is_open());
    assert_eq!(browser.next(), None);
}
