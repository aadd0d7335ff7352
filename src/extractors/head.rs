//! Page-level metadata the readability engine does not report: the lead
//! image and the favicon. Both are read from `<head>` and made absolute.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static META_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("meta").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("link[rel][href]").unwrap());

/// Meta keys checked for the lead image, in priority order
const IMAGE_KEYS: &[&str] = &[
    "og:image",
    "og:image:url",
    "og:image:secure_url",
    "twitter:image",
    "twitter:image:src",
];

pub fn lead_image(document: &Html, base_url: &Url) -> Option<String> {
    let metas: Vec<(String, &str)> = document
        .select(&META_SELECTOR)
        .filter_map(|el| {
            let key = el
                .value()
                .attr("property")
                .or_else(|| el.value().attr("name"))?;
            let content = el.value().attr("content")?.trim();
            if content.is_empty() {
                return None;
            }
            Some((key.trim().to_ascii_lowercase(), content))
        })
        .collect();

    IMAGE_KEYS.iter().find_map(|wanted| {
        metas
            .iter()
            .find(|(key, _)| key.as_str() == *wanted)
            .and_then(|(_, content)| resolve(base_url, content))
    })
}

/// Pick the `rel~=icon` link with the largest square size; the first one wins ties.
pub fn favicon(document: &Html, base_url: &Url) -> Option<String> {
    let mut best: Option<(u32, &str)> = None;

    for link in document.select(&LINK_SELECTOR) {
        let rel = link.value().attr("rel").unwrap_or_default();
        if !rel
            .split_ascii_whitespace()
            .any(|token| token.eq_ignore_ascii_case("icon"))
        {
            continue;
        }
        let href = link.value().attr("href").unwrap_or_default().trim();
        if href.is_empty() {
            continue;
        }

        let size = link.value().attr("sizes").map(largest_square).unwrap_or(0);
        match best {
            Some((best_size, _)) if best_size >= size => {}
            _ => best = Some((size, href)),
        }
    }

    best.and_then(|(_, href)| resolve(base_url, href))
}

/// Largest square edge in a `sizes` attribute such as `16x16 32x32`.
fn largest_square(sizes: &str) -> u32 {
    sizes
        .split_ascii_whitespace()
        .filter_map(|size| {
            let lower = size.to_ascii_lowercase();
            let (width, height) = lower.split_once('x')?;
            let width = width.parse::<u32>().ok()?;
            let height = height.parse::<u32>().ok()?;
            (width == height).then_some(width)
        })
        .max()
        .unwrap_or(0)
}

fn resolve(base_url: &Url, href: &str) -> Option<String> {
    base_url.join(href).ok().map(String::from)
}
