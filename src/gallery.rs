//! Gallery browsing state: category filter, incremental reveal and the
//! lightbox.
//!
//! A [`GalleryBrowser`] borrows the immutable item list and owns nothing but
//! view state. Every index it hands out or accepts is clamped against the
//! *visible* list, so a stale index from an old URL or a changed filter never
//! reads out of bounds.

use evermore_api_structs::{Filter, GalleryAction, GalleryState};

use crate::models::gallery::GalleryItem;

pub const DEFAULT_WINDOW: usize = 12;
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Incremental reveal parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// Items shown right after a category is selected.
    pub initial: usize,
    /// Items added by each "load more".
    pub page_size: usize,
}

impl Default for Window {
    fn default() -> Self {
        Window {
            initial: DEFAULT_WINDOW,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Keyboard inputs the lightbox reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value; anything else is not ours.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "Escape" | "Esc" => Some(Key::Escape),
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}

/// Items whose category matches `filter`, in catalogue order.
pub fn filter_items(items: &[GalleryItem], filter: Filter) -> Vec<&GalleryItem> {
    items
        .iter()
        .filter(|item| filter.matches(item.category))
        .collect()
}

#[derive(Clone, Debug)]
pub struct GalleryBrowser<'a> {
    items: &'a [GalleryItem],
    window: Window,
    filter: Filter,
    filtered: Vec<&'a GalleryItem>,
    visible_count: usize,
    active_index: usize,
    is_open: bool,
}

impl<'a> GalleryBrowser<'a> {
    pub fn new(items: &'a [GalleryItem], window: Window) -> Self {
        let mut browser = GalleryBrowser {
            items,
            window,
            filter: Filter::All,
            filtered: Vec::new(),
            visible_count: 0,
            active_index: 0,
            is_open: false,
        };
        browser.select_category(Filter::All);
        browser
    }

    /// Rebuilds a browser from serialized view state, clamping every value
    /// instead of rejecting it.
    pub fn restore(items: &'a [GalleryItem], window: Window, state: GalleryState) -> Self {
        let mut browser = GalleryBrowser::new(items, window);
        browser.select_category(state.filter);
        if let Some(visible) = state.visible {
            browser.visible_count = visible.clamp(browser.initial_visible(), browser.filtered.len());
        }
        if let Some(index) = state.open {
            browser.open(index);
        }
        browser
    }

    /// The minimal state that reproduces this view through [`restore`](Self::restore).
    pub fn state(&self) -> GalleryState {
        GalleryState {
            filter: self.filter,
            visible: (self.visible_count > self.initial_visible()).then_some(self.visible_count),
            open: self.active_index(),
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn filtered(&self) -> &[&'a GalleryItem] {
        &self.filtered
    }

    pub fn visible(&self) -> &[&'a GalleryItem] {
        &self.filtered[..self.visible_count]
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn has_more(&self) -> bool {
        self.visible_count < self.filtered.len()
    }

    /// Selecting a category always resets the reveal window, even when the
    /// category is unchanged.
    pub fn select_category(&mut self, filter: Filter) {
        self.filter = filter;
        self.filtered = filter_items(self.items, filter);
        self.visible_count = self.initial_visible();
        self.reclamp();
    }

    /// Reveals the next page. Returns `false` once everything is visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.visible_count = self
            .visible_count
            .saturating_add(self.window.page_size)
            .min(self.filtered.len());
        true
    }

    /// Opens the lightbox on the visible item at `index`, clamped into range.
    /// Does nothing when nothing is visible.
    pub fn open(&mut self, index: usize) -> Option<&'a GalleryItem> {
        let last = self.visible_count.checked_sub(1)?;
        self.active_index = index.min(last);
        self.is_open = true;
        self.active_item()
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn next(&mut self) -> Option<&'a GalleryItem> {
        self.step(|index, len| (index + 1) % len)
    }

    pub fn previous(&mut self) -> Option<&'a GalleryItem> {
        self.step(|index, len| (index + len - 1) % len)
    }

    /// Applies a keyboard input. Keys are inert while the lightbox is closed;
    /// returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => {
                self.previous();
            },
            Key::ArrowRight => {
                self.next();
            },
        }
        true
    }

    pub fn apply(&mut self, action: &GalleryAction) {
        match action {
            GalleryAction::SelectCategory { filter } => self.select_category(*filter),
            GalleryAction::LoadMore => {
                self.load_more();
            },
            GalleryAction::Open { index } => {
                self.open(*index);
            },
            GalleryAction::Close => self.close(),
            GalleryAction::Next => {
                self.next();
            },
            GalleryAction::Previous => {
                self.previous();
            },
            GalleryAction::Key { key } => {
                if let Some(key) = Key::from_name(key) {
                    self.handle_key(key);
                }
            },
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Position of the lightbox in the visible list, `None` while closed.
    pub fn active_index(&self) -> Option<usize> {
        self.is_open.then_some(self.active_index)
    }

    pub fn active_item(&self) -> Option<&'a GalleryItem> {
        if !self.is_open {
            return None;
        }
        self.visible().get(self.active_index).copied()
    }

    fn initial_visible(&self) -> usize {
        self.window.initial.min(self.filtered.len())
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) -> Option<&'a GalleryItem> {
        if !self.is_open || self.visible_count == 0 {
            return None;
        }
        self.reclamp();
        self.active_index = advance(self.active_index, self.visible_count);
        self.active_item()
    }

    /// Keeps the lightbox index inside the visible list; closes it when the
    /// list is empty.
    fn reclamp(&mut self) {
        match self.visible_count.checked_sub(1) {
            Some(last) => self.active_index = self.active_index.min(last),
            None => {
                self.active_index = 0;
                self.is_open = false;
            },
        }
    }
}
