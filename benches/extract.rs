// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use social_fetch::{
    core::Page,
    model::{FetchResult, Platform, ProviderOutput},
    providers::twitter::extract_feed,
    sink::render_text,
};

/// Synthetic timeline: `n` articles, each with text, a time and an image.
fn timeline(n: usize) -> String {
    let mut html = String::from(
        "<html><body><img src='https://pbs.twimg.com/profile_images/1/me.jpg'>\
         <div data-testid='UserName'><span>Jack</span></div>",
    );
    for i in 0..n {
        html.push_str(&format!(
            "<article><div lang='en'>tweet number {i} with some words in it</div>\
             <time datetime='2024-01-01T00:00:{:02}Z'>Jan 1</time>\
             <img src='https://pbs.twimg.com/media/{i}.jpg'></article>",
            i % 60
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let html = timeline(40);

    c.bench_function("twitter_parse_and_extract_5", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(&html));
            black_box(extract_feed(&page, 5).len())
        })
    });

    let page = Page::parse(&html);
    c.bench_function("twitter_extract_40", |b| {
        b.iter(|| black_box(extract_feed(black_box(&page), 40).len()))
    });

    let result = FetchResult::from_output(
        Platform::Twitter,
        "jack",
        ProviderOutput::Items(extract_feed(&page, 40)),
        3.21,
    );
    c.bench_function("render_text_40_tweets", |b| {
        b.iter(|| black_box(render_text(black_box(&result)).len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
