// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use en_scrape::scrape;

fn synthetic_page(n: usize) -> String {
    let mut page = String::from("<html><body>");
    for i in 0..n {
        page.push_str(&format!(
            r#"<div class="genre scanme" preview_url="http://example.com/{i}.mp3">genre {i}» </div>"#
        ));
    }
    page.push_str("</body></html>");
    page
}

fn bench_extract(c: &mut Criterion) {
    let doc = synthetic_page(2000);

    c.bench_function("extract_samples_2000", |b| {
        b.iter(|| {
            let samples = scrape::extract_samples(black_box(&doc));
            black_box(samples.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
