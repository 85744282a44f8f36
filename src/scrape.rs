// src/scrape.rs

use scraper::{Html, Selector};

use crate::params::{GENRE_SELECTOR, PREVIEW_ATTR};

/// One downloadable genre preview, in source-page order.
/// Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenreSample {
    pub name: String,
    pub filename: String,
    pub url: String,
}

/// Collect every well-formed genre entry from the source page, in document
/// order. Entries missing the preview link or left with an empty label are
/// skipped silently. Pure: re-running re-parses from scratch.
pub fn extract_samples(html_doc: &str) -> Vec<GenreSample> {
    let doc = Html::parse_document(html_doc);
    let genres = Selector::parse(GENRE_SELECTOR).expect("static selector");

    let mut samples = Vec::new();
    for el in doc.select(&genres) {
        let url = match el.value().attr(PREVIEW_ATTR) {
            Some(u) if !u.is_empty() => u,
            _ => continue,
        };
        let label: String = el.text().collect();
        let name = strip_label_suffix(&label);
        if name.is_empty() {
            continue;
        }

        samples.push(GenreSample {
            name: s!(name),
            filename: derive_filename(name),
            url: s!(url),
        });
    }
    samples
}

/// The site suffixes every genre label with a fixed two-character playback
/// glyph; drop it. Quirk of the upstream markup, not general text cleaning.
pub fn strip_label_suffix(label: &str) -> &str {
    let mut chars = label.chars();
    chars.next_back();
    chars.next_back();
    chars.as_str()
}

/// "Deep House " → "Deep_House_.mp3". Deterministic.
pub fn derive_filename(name: &str) -> String {
    format!("{}.mp3", name).replace(' ', "_")
}
