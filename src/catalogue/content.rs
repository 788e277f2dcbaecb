use crate::i18n::Localized;
use crate::models::content::{ContactDetails, FaqEntry, Package, PackageKind, Testimonial};

const fn l(bg: &'static str, en: &'static str) -> Localized<&'static str> {
    Localized::new(bg, en)
}

const OFFICIAL_CONTRACT: Localized<&str> = l("Официален договор", "Official contract");
const UNLIMITED_PHOTOS: Localized<&str> = l("Неограничен брой снимки", "Unlimited number of photos");
const FULL_DAY: Localized<&str> = l("Целодневно покритие", "Full day coverage");

pub(super) static PACKAGES: &[Package] = &[
    Package {
        name: "Wedding Package 1",
        price_bgn: 1170,
        price_eur: 600,
        kind: PackageKind::Photo,
        featured: false,
        features: &[
            l("1 сватбен фотограф", "1 wedding photographer"),
            l("До 10 часа покритие", "Up to 10 hours coverage"),
            UNLIMITED_PHOTOS,
            l("Доставка до 60 дни", "Delivery within 60 days"),
            l("USB флаш памет или облачен линк", "USB flash drive or cloud link"),
            l("15 снимки 10x15см подарък", "15 photos 10x15cm gift"),
            OFFICIAL_CONTRACT,
        ],
    },
    Package {
        name: "Wedding Package 2",
        price_bgn: 1370,
        price_eur: 700,
        kind: PackageKind::Photo,
        featured: false,
        features: &[
            l("1 сватбен фотограф", "1 wedding photographer"),
            FULL_DAY,
            UNLIMITED_PHOTOS,
            l("USB в стилна дървена кутийка", "USB in stylish wooden box"),
            l("30 снимки 10x15см", "30 photos 10x15cm"),
            l("Луксозна фотокнига 25x25см", "Luxury photo book 25x25cm"),
            l("2 принта 30x40см", "2 prints 30x40cm"),
            l("Доставка до 60 работни дни", "Delivery within 60 business days"),
            OFFICIAL_CONTRACT,
        ],
    },
    Package {
        name: "Wedding Package 4",
        price_bgn: 1900,
        price_eur: 970,
        kind: PackageKind::Photo,
        featured: false,
        features: &[
            l("2 сватбени фотографи", "2 wedding photographers"),
            FULL_DAY,
            UNLIMITED_PHOTOS,
            l("USB в стилна дървена кутийка", "USB in stylish wooden box"),
            l("30 снимки 13x18см", "30 photos 13x18cm"),
            l("Следсватбена фотосесия подарък", "Post-wedding photoshoot gift"),
            l("Доставка до 60 работни дни", "Delivery within 60 business days"),
            OFFICIAL_CONTRACT,
        ],
    },
    Package {
        name: "Video Package",
        price_bgn: 1370,
        price_eur: 700,
        kind: PackageKind::Video,
        featured: false,
        features: &[
            l("Видеограф за целия ден", "Videographer for the whole day"),
            l("Full HD качество", "Full HD quality"),
            l("USB в стилна кутийка", "USB in stylish box"),
            l("Облачен линк за споделяне", "Cloud link for sharing"),
            l("Доставка до 60 работни дни", "Delivery within 60 business days"),
            OFFICIAL_CONTRACT,
        ],
    },
    Package {
        name: "Combo (Photo + Video)",
        price_bgn: 2740,
        price_eur: 1400,
        kind: PackageKind::Combo,
        featured: true,
        features: &[
            l("Фотограф + Видеограф", "Photographer + Videographer"),
            l("До 12 часа покритие", "Up to 12 hours coverage"),
            UNLIMITED_PHOTOS,
            l("Full HD видео", "Full HD video"),
            l("USB в стилна кутийка", "USB in stylish box"),
            l("15 снимки + A4 принт подарък", "15 photos + A4 print gift"),
            l(
                "Доставка: фото 30-60 дни, видео 60 дни",
                "Delivery: photo 30-60 days, video 60 days",
            ),
            OFFICIAL_CONTRACT,
        ],
    },
];

pub(super) static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        couple: l("Мария и Георги", "Maria & George"),
        month: l("Септември 2024", "September 2024"),
        text: l(
            "Невероятен екип! Снимките са прекрасни и качеството е изключително. Препоръчваме ги на всички наши приятели!",
            "Amazing team! The photos are beautiful and the quality is exceptional. We recommend them to all our friends!",
        ),
        rating: 5,
    },
    Testimonial {
        couple: l("Иван и Елена", "Ivan & Elena"),
        month: l("Юли 2024", "July 2024"),
        text: l(
            "Професионализмът и креативността на екипа ни впечатлиха. Уловиха всеки важен момент от нашия специален ден.",
            "The professionalism and creativity of the team impressed us. They captured every important moment of our special day.",
        ),
        rating: 5,
    },
    Testimonial {
        couple: l("София и Димитър", "Sofia & Dimitar"),
        month: l("Май 2024", "May 2024"),
        text: l(
            "Благодарим за прекрасните спомени! Видеото и снимките надминаха всичките ни очаквания. Истински професионалисти!",
            "Thank you for the beautiful memories! The video and photos exceeded all our expectations. True professionals!",
        ),
        rating: 5,
    },
];

pub(super) static FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: l(
            "Колко време отнема обработката на снимките?",
            "How long does photo processing take?",
        ),
        answer: l(
            "Обработката на снимките отнема между 30-60 работни дни в зависимост от избрания пакет. За видео материалите времето е до 60 работни дни.",
            "Photo processing takes 30-60 business days depending on the selected package. For video materials, the time is up to 60 business days.",
        ),
    },
    FaqEntry {
        question: l("Можем ли да платим на части?", "Can we pay in installments?"),
        answer: l(
            "Да, предлагаме възможност за плащане на части по договор. Обикновено се изисква депозит от 30% при подписване на договора.",
            "Yes, we offer the possibility of installment payments by contract. Usually a 30% deposit is required when signing the contract.",
        ),
    },
    FaqEntry {
        question: l("Пътувате ли извън Плевен?", "Do you travel outside Pleven?"),
        answer: l(
            "Да, пътуваме в цяла България и чужбина. Разходите за транспорт и настаняване се обсъждат индивидуално.",
            "Yes, we travel throughout Bulgaria and abroad. Transportation and accommodation costs are discussed individually.",
        ),
    },
    FaqEntry {
        question: l("Какво включват пакетите?", "What do the packages include?"),
        answer: l(
            "Всички пакети включват професионално фотографиране, обработка на снимките, USB носител в стилна кутия и официален договор. Детайлите за всеки пакет можете да видите в секцията с цени.",
            "All packages include professional photography, photo processing, USB drive in a stylish box and official contract. You can see the details for each package in the pricing section.",
        ),
    },
    FaqEntry {
        question: l("Имате ли резервна техника?", "Do you have backup equipment?"),
        answer: l(
            "Да, винаги носим резервна техника за всички важни компоненти - фотоапарати, обективи, светкавици и карти памет.",
            "Yes, we always carry backup equipment for all important components - cameras, lenses, flashes and memory cards.",
        ),
    },
    FaqEntry {
        question: l(
            "Можем ли да видим пълна галерия от сватба?",
            "Can we see a full wedding gallery?",
        ),
        answer: l(
            "Разбира се! Можем да ви покажем пълни галерии от предишни сватби при лична среща или онлайн консултация.",
            "Of course! We can show you full galleries from previous weddings during a personal meeting or online consultation.",
        ),
    },
];

pub(super) static CONTACT: ContactDetails = ContactDetails {
    phone: "+359 888 123 456",
    email: "info@evermoreweddings.bg",
    location: l("Плевен, България", "Pleven, Bulgaria"),
    instagram: "https://instagram.com/evermoreweddings",
    facebook: "https://facebook.com/evermoreweddings",
};
