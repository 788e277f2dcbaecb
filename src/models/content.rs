use serde::Serialize;

use crate::i18n::{Language, Localized};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    Photo,
    Video,
    Combo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub price_bgn: u32,
    pub price_eur: u32,
    pub kind: PackageKind,
    pub featured: bool,
    pub features: &'static [Localized<&'static str>],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub couple: Localized<&'static str>,
    pub month: Localized<&'static str>,
    pub text: Localized<&'static str>,
    /// Stars out of five.
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: Localized<&'static str>,
    pub answer: Localized<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub phone: &'static str,
    pub email: &'static str,
    pub location: Localized<&'static str>,
    pub instagram: &'static str,
    pub facebook: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PackageView {
    pub name: &'static str,
    pub price: u32,
    pub price_eur: u32,
    pub kind: PackageKind,
    pub featured: bool,
    pub features: Vec<&'static str>,
}

impl Package {
    pub fn view(&self, language: Language) -> PackageView {
        PackageView {
            name: self.name,
            price: self.price_bgn,
            price_eur: self.price_eur,
            kind: self.kind,
            featured: self.featured,
            features: self.features.iter().map(|f| f.get(language)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TestimonialView {
    pub couple: &'static str,
    pub month: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn view(&self, language: Language) -> TestimonialView {
        TestimonialView {
            couple: self.couple.get(language),
            month: self.month.get(language),
            text: self.text.get(language),
            rating: self.rating.min(5),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FaqView {
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    pub fn view(&self, language: Language) -> FaqView {
        FaqView {
            question: self.question.get(language),
            answer: self.answer.get(language),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactView {
    pub phone: &'static str,
    pub phone_href: String,
    pub email: &'static str,
    pub location: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
}

impl ContactDetails {
    pub fn view(&self, language: Language) -> ContactView {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        ContactView {
            phone: self.phone,
            phone_href: format!("tel:{}", digits),
            email: self.email,
            location: self.location.get(language),
            instagram: self.instagram,
            facebook: self.facebook,
        }
    }
}
