//! Field rules for an eBay `/itm/` listing page.
//!
//! Each rule reads the parsed document on its own and falls back to
//! [`NOT_AVAILABLE`] (or an empty list) with a warning when its markup is
//! missing. A miss in one rule never affects another.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::models::{Listing, NOT_AVAILABLE, ProductRecord, SellerRecord};

static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(".x-item-title__mainTitle span.ux-textspans--BOLD"));
static PRICE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(".x-bin-price__content .x-price-primary span.ux-textspans"));
static PHOTO_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".ux-image-carousel-item.active img"));
static SHIPPING_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(".ux-layout-section--shipping .ux-textspans--BOLD"));
static SHIPPING_NOTICE_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(".ux-layout-section--shipping .ux-textspans--NEGATIVE"));
static SECTION_TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".section-title"));
static SECTION_COL_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".ux-layout-section-evo__col"));
static LABEL_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".ux-labels-values__labels"));
static VALUE_SEL: LazyLock<Selector> = LazyLock::new(|| selector(".ux-labels-values__values"));
static SELLER_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(".x-sellercard-atf__info__about-seller a.ux-action"));

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d.,]+").expect("valid number regex"));

const DETAIL_HEADINGS: [&str; 2] = ["Item specifics", "About this product"];
const NO_SHIPPING_MARKER: &str = "Does not ship";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

pub fn parse_listing(url: &str, html: &str) -> Listing {
    let doc = Html::parse_document(html);

    // Records are assembled only once every rule has produced its value.
    Listing {
        main_information: ProductRecord {
            name: parse_title(&doc),
            price: parse_price(&doc),
            shipping_price: parse_shipping(&doc),
            photo_url: parse_photo_url(&doc),
            details: parse_details(&doc),
            url: url.to_string(),
        },
        seller_information: parse_seller(&doc),
    }
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// First run of digits and separators in `text`, e.g. `"123.45"` from `"US $123.45 (approx.)"`.
pub fn extract_number(text: &str) -> Option<&str> {
    NUMBER_RE.find(text).map(|m| m.as_str())
}

fn numeric_field(field: &str, text: &str) -> String {
    match extract_number(text) {
        Some(n) => n.to_string(),
        None => {
            warn!(field, text, "no numeric value in element text");
            not_available()
        }
    }
}

fn parse_title(doc: &Html) -> String {
    match doc.select(&TITLE_SEL).next() {
        Some(el) => text_of(el),
        None => {
            warn!(field = "name", "title element not found");
            not_available()
        }
    }
}

fn parse_price(doc: &Html) -> String {
    match doc.select(&PRICE_SEL).next() {
        Some(el) => numeric_field("price", &text_of(el)),
        None => {
            warn!(field = "price", "price element not found");
            not_available()
        }
    }
}

fn parse_photo_url(doc: &Html) -> String {
    let Some(img) = doc.select(&PHOTO_SEL).next() else {
        warn!(field = "photoUrl", "image element not found");
        return not_available();
    };
    match img.value().attr("src") {
        Some(src) => src.to_string(),
        None => {
            warn!(field = "photoUrl", "image element has no src");
            not_available()
        }
    }
}

fn parse_shipping(doc: &Html) -> String {
    if let Some(el) = doc.select(&SHIPPING_SEL).next() {
        let text = text_of(el);
        if text.contains(NO_SHIPPING_MARKER) {
            return format!("({text})");
        }
        return numeric_field("shippingPrice", &text);
    }

    warn!(field = "shippingPrice", "shipping price element not found");
    match doc.select(&SHIPPING_NOTICE_SEL).next() {
        Some(notice) => format!("({})", text_of(notice)),
        None => not_available(),
    }
}

fn parse_details(doc: &Html) -> Vec<(String, String)> {
    let mut details = Vec::new();

    for title in doc.select(&SECTION_TITLE_SEL) {
        let heading = title.text().collect::<String>();
        if !DETAIL_HEADINGS.iter().any(|h| heading.contains(h)) {
            continue;
        }
        let Some(section) = title.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        for col in section.select(&SECTION_COL_SEL) {
            let label = col.select(&LABEL_SEL).next();
            let value = col.select(&VALUE_SEL).next();
            if let (Some(label), Some(value)) = (label, value) {
                details.push((text_of(label), text_of(value)));
            }
        }
    }

    if details.is_empty() {
        warn!(field = "details", "no item specifics found");
    }
    details
}

fn parse_seller(doc: &Html) -> SellerRecord {
    let Some(link) = doc.select(&SELLER_SEL).next() else {
        warn!(field = "sellerInformation", "seller information not found");
        return SellerRecord::default();
    };
    let items_link = link.value().attr("href").map_or_else(
        || {
            warn!(field = "itemsLink", "seller link has no href");
            not_available()
        },
        str::to_string,
    );
    SellerRecord {
        name: text_of(link),
        items_link,
    }
}
