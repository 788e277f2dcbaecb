use crate::models::content::{ContactDetails, FaqEntry, Package, Testimonial};
use crate::models::gallery::GalleryItem;

mod content;
mod items;

pub trait GalleryProvider {
    fn gallery_items(&self) -> &[GalleryItem];
}

pub trait ContentProvider {
    fn packages(&self) -> &[Package];

    fn testimonials(&self) -> &[Testimonial];

    fn faq(&self) -> &[FaqEntry];

    fn contact(&self) -> &ContactDetails;
}

/// The site's fixed content, built once at start-up and never mutated.
#[derive(Clone, Debug)]
pub struct Catalogue {
    items: Vec<GalleryItem>,
}

impl Catalogue {
    pub fn builtin() -> Self {
        Catalogue::with_items(items::GALLERY_ITEMS.to_vec())
    }

    pub fn with_items(items: Vec<GalleryItem>) -> Self {
        Catalogue { items }
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Catalogue::builtin()
    }
}

impl GalleryProvider for Catalogue {
    fn gallery_items(&self) -> &[GalleryItem] {
        &self.items
    }
}

impl ContentProvider for Catalogue {
    fn packages(&self) -> &[Package] {
        content::PACKAGES
    }

    fn testimonials(&self) -> &[Testimonial] {
        content::TESTIMONIALS
    }

    fn faq(&self) -> &[FaqEntry] {
        content::FAQ
    }

    fn contact(&self) -> &ContactDetails {
        &content::CONTACT
    }
}
