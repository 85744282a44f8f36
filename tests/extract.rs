// tests/extract.rs
//
// Extraction properties: document order, silent skips, and the
// label-suffix / filename derivation rules.
//
use en_scrape::s;
use en_scrape::scrape::{GenreSample, derive_filename, extract_samples, strip_label_suffix};

fn page(entries: &str) -> String {
    format!("<html><body>{}</body></html>", entries)
}

fn entry(url: &str, label: &str) -> String {
    format!(r#"<div class="genre scanme" preview_url="{url}">{label}</div>"#)
}

#[test]
fn well_formed_entries_extract_in_document_order() {
    let doc = page(&format!(
        "{}{}{}",
        entry("http://x/a.mp3", "deep house» "),
        entry("http://x/b.mp3", "acid techno» "),
        entry("http://x/c.mp3", "vaporwave» "),
    ));
    let samples = extract_samples(&doc);
    assert_eq!(samples.len(), 3);
    assert_eq!(
        samples[0],
        GenreSample {
            name: s!("deep house"),
            filename: s!("deep_house.mp3"),
            url: s!("http://x/a.mp3"),
        }
    );
    let names: Vec<&str> = samples.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["deep house", "acid techno", "vaporwave"]);
}

#[test]
fn entry_without_preview_url_is_skipped() {
    let doc = page(&format!(
        r#"{}<div class="genre scanme">orphan» </div>{}"#,
        entry("http://x/a.mp3", "first» "),
        entry("http://x/b.mp3", "last» "),
    ));
    let samples = extract_samples(&doc);
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].name, "first");
    assert_eq!(samples[1].name, "last");
}

#[test]
fn entry_with_empty_preview_url_is_skipped() {
    let doc = page(&entry("", "deep house» "));
    assert!(extract_samples(&doc).is_empty());
}

#[test]
fn entry_with_empty_label_after_strip_is_skipped() {
    // Exactly the two-character suffix: nothing left once it is dropped.
    let doc = page(&entry("http://x/a.mp3", "» "));
    assert!(extract_samples(&doc).is_empty());
}

#[test]
fn elements_without_both_marker_classes_are_ignored() {
    let doc = page(&format!(
        r#"<div class="genre" preview_url="http://x/a.mp3">genre only» </div>
           <div class="scanme" preview_url="http://x/b.mp3">scanme only» </div>
           {}"#,
        entry("http://x/c.mp3", "both» "),
    ));
    let samples = extract_samples(&doc);
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].url, "http://x/c.mp3");
}

#[test]
fn nested_markup_and_entities_resolve_in_the_label() {
    let doc = page(&entry("http://x/rb.mp3", "r&amp;b <b>revival</b>» "));
    let samples = extract_samples(&doc);
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].name, "r&b revival");
    assert_eq!(samples[0].filename, "r&b_revival.mp3");
}

#[test]
fn label_suffix_strip_drops_exactly_two_chars() {
    assert_eq!(strip_label_suffix("Deep House xx"), "Deep House ");
    assert_eq!(strip_label_suffix("ab"), "");
    assert_eq!(strip_label_suffix("a"), "");
    assert_eq!(strip_label_suffix(""), "");
    // Multi-byte suffix characters count as characters, not bytes.
    assert_eq!(strip_label_suffix("techno» "), "techno");
}

#[test]
fn filename_derivation_is_pure_and_deterministic() {
    assert_eq!(derive_filename("Deep House "), "Deep_House_.mp3");
    assert_eq!(derive_filename("Deep House "), "Deep_House_.mp3");
    assert_eq!(derive_filename("vaporwave"), "vaporwave.mp3");
    assert_eq!(derive_filename("two  spaces"), "two__spaces.mp3");
}

#[test]
fn rerunning_extraction_yields_identical_samples() {
    let doc = page(&format!(
        "{}{}",
        entry("http://x/a.mp3", "deep house» "),
        entry("http://x/b.mp3", "acid techno» "),
    ));
    assert_eq!(extract_samples(&doc), extract_samples(&doc));
}
