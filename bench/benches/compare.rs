use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use na_json::{SubscriptingOptions, Value};
use serde::Deserialize;

#[derive(Deserialize)]
struct Item<'a> {
    #[allow(dead_code)]
    id: u64,
    #[allow(dead_code)]
    name: &'a str,
}

fn document() -> String {
    let items: Vec<String> = (0..1000)
        .map(|i| {
            format!(
                r#"{{"id": {i}, "name": "item-{i}", "meta": {{"tags": ["a", "b"], "note": null}}}}"#
            )
        })
        .collect();
    format!(r#"{{"data": {{"items": [{}]}}}}"#, items.join(","))
}

fn bench_access(c: &mut Criterion) {
    let text = document();
    let ours: Value = na_json::from_str(&text).unwrap();
    let theirs: serde_json::Value = serde_json::from_str(&text).unwrap();

    let mut group = c.benchmark_group("deep_int");
    group.bench_function("na_json/get_i64", |b| {
        b.iter(|| black_box(&ours).get_i64(&[&"data", &"items", &black_box(500), &"id"]))
    });
    group.bench_function("serde_json/pointer", |b| {
        b.iter(|| {
            black_box(&theirs)
                .pointer(black_box("/data/items/500/id"))
                .and_then(serde_json::Value::as_i64)
        })
    });
    group.bench_function("serde_json/index", |b| {
        b.iter(|| black_box(&theirs)["data"]["items"][black_box(500)]["id"].as_i64())
    });
    group.finish();

    let mut group = c.benchmark_group("absent");
    let options = SubscriptingOptions::all();
    group.bench_function("na_json/null_along_path", |b| {
        b.iter(|| {
            black_box(&ours).get_str_opt(
                &[&"data", &"items", &black_box(10), &"meta", &"note", &"text"],
                options,
            )
        })
    });
    group.bench_function("na_json/missing_key", |b| {
        b.iter(|| black_box(&ours).get_str_opt(&[&"data", &"missing"], options))
    });
    group.finish();

    let mut group = c.benchmark_group("decode");
    group.bench_function("na_json/get_array_of", |b| {
        b.iter(|| black_box(&ours).get_array_of::<Item>(&[&"data", &"items"]))
    });
    group.finish();
}

criterion_group!(benches, bench_access);
criterion_main!(benches);
